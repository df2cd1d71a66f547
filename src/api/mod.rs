//! REST client core shared by the resource clients.
//!
//! Every call maps 1:1 to a backend endpoint and resolves to a single
//! result. No retries, no caching, no pagination — failures are shaped into
//! the crate error taxonomy and propagate to the invoking command unchanged.

pub mod files;
pub mod projects;
pub mod tasks;
pub mod versions;

pub use files::FilesClient;
pub use projects::ProjectsClient;
pub use tasks::TasksClient;
pub use versions::VersionsClient;

use crate::session::SessionStore;
use crate::types::{Error, ErrorBody, FieldErrorsBody, Result};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Header carrying the bearer token on authenticated requests.
pub const AUTH_HEADER: &str = "X-AUTH-TOKEN";

/// HTTP plumbing shared by the auth and resource clients: owns the base URL
/// and the session store, attaches the token header, and shapes errors.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn projects(&self) -> ProjectsClient<'_> {
        ProjectsClient::new(self)
    }

    pub fn tasks(&self) -> TasksClient<'_> {
        TasksClient::new(self)
    }

    pub fn files(&self) -> FilesClient<'_> {
        FilesClient::new(self)
    }

    pub fn versions(&self) -> VersionsClient<'_> {
        VersionsClient::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request, attaching the stored token when one exists.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.session.token() {
            builder = builder.header(AUTH_HEADER, token);
        }
        builder
    }

    /// Sends a request and shapes any non-2xx response into an error.
    ///
    /// `resource` names what was being accessed, for 404 reporting.
    pub(crate) async fn execute(&self, builder: RequestBuilder, resource: &str) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, resource, "response received");

        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response, resource).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<T> {
        debug!(path, "GET");
        let response = self.execute(self.request(Method::GET, path), resource).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T> {
        debug!(path, "POST");
        let builder = self.request(Method::POST, path).json(body);
        let response = self.execute(builder, resource).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str, resource: &str) -> Result<()> {
        debug!(path, "DELETE");
        self.execute(self.request(Method::DELETE, path), resource)
            .await?;
        Ok(())
    }
}

/// Maps a non-2xx response onto the error taxonomy.
///
/// 400 bodies are inspected for a field-error list first, then for the
/// generic code+params shape; anything unparseable falls back to a synthetic
/// `http.<status>` code so the command layer always has something to show.
pub(crate) async fn error_from_response(response: Response, resource: &str) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthenticated,
        StatusCode::NOT_FOUND => Error::NotFound(resource.to_string()),
        StatusCode::BAD_REQUEST => {
            if let Ok(parsed) = serde_json::from_str::<FieldErrorsBody>(&body) {
                Error::FieldValidation(parsed.field_errors)
            } else {
                generic_error(&body, status)
            }
        }
        _ => generic_error(&body, status),
    }
}

pub(crate) fn generic_error(body: &str, status: StatusCode) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Error::Api {
            code: parsed.code,
            params: parsed.params,
        },
        Err(_) => Error::Api {
            code: format!("http.{}", status.as_u16()),
            params: Vec::new(),
        },
    }
}
