//! Pre-command session gate.
//!
//! The terminal analog of a route guard: protected commands consult the
//! session store before doing anything, and an unauthenticated session is
//! turned into `Error::Unauthenticated`, which the binary renders as a
//! log-in hint. Stateless, synchronous, no caching.

use crate::session::SessionStore;
use crate::types::{Claims, Error, Result};

/// Gate-keeps access to operations that need an authenticated session.
pub struct AuthGuard<'a> {
    session: &'a SessionStore,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a SessionStore) -> Self {
        Self { session }
    }

    /// Whether a protected operation may proceed.
    pub fn can_activate(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Returns the session's claims, or `Error::Unauthenticated` when the
    /// token is absent or expired.
    pub fn require(&self) -> Result<Claims> {
        if !self.can_activate() {
            return Err(Error::Unauthenticated);
        }
        self.session.claims()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use tempfile::TempDir;

    fn store_with_token(expires_in_secs: i64) -> (TempDir, SessionStore) {
        let dir = TempDir::new().expect("should create temp dir");
        let store = SessionStore::new(dir.path().join("token"));

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user@example.com".to_string(),
            name: None,
            exp: now + expires_in_secs,
            iat: now,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .expect("should encode");
        store.save(&token).expect("should save");

        (dir, store)
    }

    #[test]
    fn test_guard_denies_without_token() {
        let dir = TempDir::new().expect("should create temp dir");
        let store = SessionStore::new(dir.path().join("token"));
        let guard = AuthGuard::new(&store);

        assert!(!guard.can_activate());
        assert!(matches!(guard.require(), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_guard_denies_expired_token() {
        let (_dir, store) = store_with_token(-30);
        let guard = AuthGuard::new(&store);

        assert!(!guard.can_activate());
        assert!(matches!(guard.require(), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_guard_allows_valid_session() {
        let (_dir, store) = store_with_token(3600);
        let guard = AuthGuard::new(&store);

        assert!(guard.can_activate());
        let claims = guard.require().expect("should yield claims");
        assert_eq!(claims.sub, "user@example.com");
    }
}
