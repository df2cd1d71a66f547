//! # dws - Document Workflow Service client
//!
//! Terminal client for a document-workflow backend: authenticate, manage
//! projects and tasks, and upload file versions.
//!
//! The crate can be used in two ways:
//!
//! 1. **As a binary** - the `dws` command
//! 2. **As a library** - import the session store and resource clients
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use dws::{ApiClient, AuthClient, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> dws::Result<()> {
//!     let session = SessionStore::new("/tmp/dws-token");
//!     let api = ApiClient::new("https://dws.example.com", session);
//!
//!     AuthClient::new(&api).login("alice@example.com", "secret").await?;
//!     for project in api.projects().list().await? {
//!         println!("{} {}", project.id, project.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`session`] - bearer-token persistence and authentication state
//! - [`auth`] - login/registration client and the session guard
//! - [`api`] - typed REST clients for projects, tasks, files, and versions
//! - [`validate`] - client-side form validation rules
//! - [`cli`] - command definitions and handlers for the `dws` binary
//! - [`config`] - `dws.toml` configuration
//! - [`types`] - data records, DTOs, and the error taxonomy

/// Typed REST clients and shared HTTP plumbing.
pub mod api;
/// Login/registration and the session guard.
pub mod auth;
/// Command-line interface.
pub mod cli;
/// Client configuration.
pub mod config;
/// Bearer-token session storage.
pub mod session;
/// Core types and error handling.
pub mod types;
/// Form validation rules.
pub mod validate;

// Re-export commonly used types
pub use api::ApiClient;
pub use auth::{AuthClient, AuthGuard};
pub use config::ClientConfig;
pub use session::SessionStore;
pub use types::{Error, Result};
