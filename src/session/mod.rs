//! Bearer-token session storage.
//!
//! The current token lives in a single file under the user's config
//! directory (overridable via configuration). Authentication state is a
//! best-effort local check against the token's embedded `exp` claim; the
//! server remains authoritative and revocation is not detected here.

use crate::types::{Claims, Error, Result, UserInfo};
use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent store for the current bearer token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given token file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing token file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a token, replacing any previous one.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.trim())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600));
        }

        Ok(())
    }

    /// Returns the stored token, or `None` when absent or empty.
    pub fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Deletes the stored token. A missing token file counts as success.
    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }

    /// Decodes the stored token's claims.
    ///
    /// The signature is NOT verified — the client never holds the signing
    /// secret. Expiry is also not checked here; callers compare `exp`
    /// themselves so an expired token can still be inspected.
    pub fn claims(&self) -> Result<Claims> {
        let token = self.token().ok_or(Error::Unauthenticated)?;
        decode_claims(&token)
    }

    /// `false` when no token is stored or its `exp` claim has passed.
    ///
    /// Best-effort local check only; not revocation-aware.
    pub fn is_authenticated(&self) -> bool {
        match self.claims() {
            Ok(claims) => claims.exp > Utc::now().timestamp(),
            Err(_) => false,
        }
    }

    /// Identity derived from the stored token, `None` when unauthenticated.
    pub fn current_user(&self) -> Option<UserInfo> {
        if !self.is_authenticated() {
            return None;
        }
        let claims = self.claims().ok()?;
        Some(UserInfo {
            email: claims.sub,
            name: claims.name,
        })
    }
}

/// Decodes a JWT's claims without verifying the signature.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims = Default::default();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| Error::Session(format!("invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().expect("should create temp dir");
        let store = SessionStore::new(dir.path().join("token"));
        (dir, store)
    }

    fn make_token(email: &str, expires_in_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            name: Some("Test User".to_string()),
            exp: now + expires_in_secs,
            iat: now,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .expect("should encode token")
    }

    #[test]
    fn test_not_authenticated_without_token() {
        let (_dir, store) = test_store();

        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_authenticated_with_valid_token() {
        let (_dir, store) = test_store();
        store
            .save(&make_token("user@example.com", 3600))
            .expect("should save");

        assert!(store.is_authenticated());
        let user = store.current_user().expect("should have identity");
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.name.as_deref(), Some("Test User"));
    }

    #[test]
    fn test_not_authenticated_once_token_expired() {
        let (_dir, store) = test_store();
        store
            .save(&make_token("user@example.com", -60))
            .expect("should save");

        // Claims are still readable, but the session no longer counts.
        assert!(store.claims().is_ok());
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_clear_restores_unauthenticated_state() {
        let (_dir, store) = test_store();
        store
            .save(&make_token("user@example.com", 3600))
            .expect("should save");
        assert!(store.is_authenticated());

        store.clear();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());

        // Clearing twice is fine.
        store.clear();
    }

    #[test]
    fn test_malformed_token_is_not_authenticated() {
        let (_dir, store) = test_store();
        store.save("not.a.token").expect("should save");

        assert!(store.claims().is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_save_overwrites_previous_token() {
        let (_dir, store) = test_store();
        store.save(&make_token("first@example.com", 3600)).unwrap();
        store.save(&make_token("second@example.com", 3600)).unwrap();

        let user = store.current_user().expect("should have identity");
        assert_eq!(user.email, "second@example.com");
    }

    #[test]
    fn test_decode_claims_rejects_garbage() {
        assert!(decode_claims("garbage").is_err());
        assert!(decode_claims("").is_err());
    }
}
