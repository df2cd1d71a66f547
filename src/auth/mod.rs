//! Authentication: credential exchange, registration, and the session guard.

pub mod guard;

pub use guard::AuthGuard;

use crate::api::ApiClient;
use crate::session::SessionStore;
use crate::types::{NewUser, Result};
use reqwest::Method;
use tracing::debug;

/// Performs the login and registration calls and keeps the session store in
/// step with their outcomes.
pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Exchanges credentials for a bearer token and persists it.
    ///
    /// On failure the server's error body (code + params) propagates
    /// unchanged and no token is stored. Unlike the resource calls, a 401
    /// here is a credential problem, not a session problem, so the error
    /// code is kept instead of collapsing into `Unauthenticated`.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .api
            .request(Method::GET, "/auth/token")
            .query(&[("email", email), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(crate::api::generic_error(&body, status));
        }

        let token = response.text().await?;
        self.session().save(token.trim())?;
        debug!(email, "login succeeded, token stored");
        Ok(())
    }

    /// Deletes the stored token. Never fails; a missing token is fine.
    pub fn logout(&self) {
        self.session().clear();
        debug!("session cleared");
    }

    /// Registers a new account.
    ///
    /// A 400 response surfaces as `Error::FieldValidation` with the server's
    /// field-error list; other failures follow the generic taxonomy.
    pub async fn register(&self, new_user: &NewUser) -> Result<()> {
        let builder = self
            .api
            .request(Method::POST, "/auth/register")
            .json(new_user);
        self.api.execute(builder, "registration").await?;
        debug!(email = %new_user.email, "registration accepted");
        Ok(())
    }

    /// Asks the server whether an account already exists for an email.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let builder = self
            .api
            .request(Method::GET, "/api/user/exists")
            .query(&[("email", email)]);
        let response = self.api.execute(builder, "user").await?;
        Ok(response.json().await?)
    }
}
