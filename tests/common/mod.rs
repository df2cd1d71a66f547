//! Shared helpers for the integration suites.

#![allow(dead_code)]

use chrono::Utc;
use dws::api::ApiClient;
use dws::session::SessionStore;
use dws::types::Claims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tempfile::TempDir;

/// Forges a token the way the backend would mint one. The client never
/// verifies the signature, so any secret works here.
pub fn make_token(email: &str, expires_in_secs: i64) -> String {
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
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("should encode token")
}

/// A client with an empty session, backed by a temp token file.
pub fn anonymous_client(base_url: &str) -> (TempDir, ApiClient) {
    let dir = TempDir::new().expect("should create temp dir");
    let session = SessionStore::new(dir.path().join("token"));
    (dir, ApiClient::new(base_url, session))
}

/// A client whose session already holds a valid token.
pub fn logged_in_client(base_url: &str, email: &str) -> (TempDir, ApiClient) {
    let (dir, api) = anonymous_client(base_url);
    api.session()
        .save(&make_token(email, 3600))
        .expect("should save token");
    (dir, api)
}
