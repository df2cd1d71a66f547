use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============= Identity Types =============

/// A user as reported by the backend or derived from token claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Claims embedded in the bearer token.
///
/// `sub` carries the user's email. The token is decoded without signature
/// verification — the client never holds the signing secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

// ============= Resource Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub number_of_participants: u64,
    #[serde(default)]
    pub number_of_tasks: u64,
    #[serde(default)]
    pub number_of_files: u64,
    #[serde(default)]
    pub last_modified_file: Option<FileSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub administrator: UserInfo,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub modification_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub number_of_participants: u64,
    #[serde(default)]
    pub tasks: Vec<TaskSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: String,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub number_of_files: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub administrator: UserInfo,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub number_of_participants: u64,
    #[serde(default)]
    pub files: Vec<FileSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub versions: Vec<VersionSummary>,
}

/// One saved version of a file. The binary payload itself is never
/// round-tripped through the client; only the metadata is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub id: String,
    pub version_string: String,
    #[serde(default)]
    pub message: Option<String>,
    pub save_date: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<UserInfo>,
}

// ============= Creation DTOs =============
// Write-only shapes submitted on creation, never mutated afterwards.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub administrator_email: String,
}

/// Payload for the multipart version upload. `file_path` points at the local
/// file whose bytes become the uploaded binary part.
#[derive(Debug, Clone)]
pub struct NewVersion {
    pub project_id: String,
    pub task_id: String,
    pub file_id: String,
    pub version_string: String,
    pub message: String,
    pub file_path: std::path::PathBuf,
}

/// Body returned by the create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: String,
}

// ============= Wire Error Shapes =============

/// Generic error body: a translatable error code plus positional parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    #[serde(default)]
    pub params: Vec<String>,
}

/// A single field-level validation failure, either produced client-side or
/// parsed out of a 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// 400 response carrying a field-error list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorsBody {
    pub field_errors: Vec<FieldError>,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Token absent or expired, or the server rejected the token.
    #[error("not authenticated")]
    Unauthenticated,

    /// One or more fields failed validation.
    #[error("validation failed on {} field(s)", .0.len())]
    FieldValidation(Vec<FieldError>),

    /// Server-reported error keyed by an error code.
    #[error("server error: {code}")]
    Api { code: String, params: Vec<String> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("session error: {0}")]
    Session(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
