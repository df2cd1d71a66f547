//! Client-side form validation.
//!
//! Synchronous rules run against field values before any request is sent;
//! the async rules issue a single HTTP probe per validation pass. Both are a
//! UX convenience only — the server re-validates everything it receives.

use crate::api::VersionsClient;
use crate::auth::AuthClient;
use crate::types::{Error, FieldError, Result};
use regex::Regex;
use std::sync::LazyLock;

// Field length limits, mirroring the backend's DTO constraints.
pub const PROJECT_NAME_MAX: usize = 40;
pub const TASK_NAME_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 1024;
pub const VERSION_LABEL_MAX: usize = 20;
pub const MESSAGE_MAX: usize = 1024;
pub const PASSWORD_MIN: usize = 8;

// Shape check only; the authoritative address validation is server-side.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

/// Accumulates field errors across a form and fails once at the end, so the
/// user sees every broken field in one pass.
#[derive(Debug, Default)]
pub struct Form {
    errors: Vec<FieldError>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rule outcome.
    pub fn check(&mut self, outcome: Option<FieldError>) -> &mut Self {
        if let Some(error) = outcome {
            self.errors.push(error);
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when every rule passed, otherwise all collected errors.
    pub fn finish(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::FieldValidation(self.errors))
        }
    }
}

// ============= Synchronous Rules =============

/// Fails when the value is empty or whitespace-only.
pub fn required(field: &str, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(
            field,
            "required",
            format!("{} must not be empty", field),
        ))
    } else {
        None
    }
}

/// Fails when the value does not look like an email address.
pub fn email_format(field: &str, value: &str) -> Option<FieldError> {
    if EMAIL_RE.is_match(value) {
        None
    } else {
        Some(FieldError::new(
            field,
            "email",
            format!("{} is not a valid email address", field),
        ))
    }
}

/// Fails when the value exceeds `max` characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Option<FieldError> {
    if value.chars().count() > max {
        Some(FieldError::new(
            field,
            "maxLength",
            format!("{} must be at most {} characters", field, max),
        ))
    } else {
        None
    }
}

/// Fails when the value is shorter than `min` characters.
pub fn min_length(field: &str, value: &str, min: usize) -> Option<FieldError> {
    if value.chars().count() < min {
        Some(FieldError::new(
            field,
            "minLength",
            format!("{} must be at least {} characters", field, min),
        ))
    } else {
        None
    }
}

/// Cross-field rule: the repeated password must equal the password. The
/// error is attached to the repeated field and clears once they match.
pub fn passwords_match(password: &str, repeated: &str) -> Option<FieldError> {
    if password == repeated {
        None
    } else {
        Some(FieldError::new(
            "passwordRepeated",
            "match",
            "passwords do not match",
        ))
    }
}

// ============= Asynchronous Rules =============

/// Valid only when an account exists for the email (used for task
/// administrator assignment).
pub async fn existing_user_email(
    auth: &AuthClient<'_>,
    field: &str,
    email: &str,
) -> Result<Option<FieldError>> {
    if auth.email_exists(email).await? {
        Ok(None)
    } else {
        Ok(Some(FieldError::new(
            field,
            "userNotFound",
            format!("no account exists for {}", email),
        )))
    }
}

/// Invalid when an account already exists for the email (used during
/// registration).
pub async fn available_user_email(
    auth: &AuthClient<'_>,
    field: &str,
    email: &str,
) -> Result<Option<FieldError>> {
    if auth.email_exists(email).await? {
        Ok(Some(FieldError::new(
            field,
            "emailTaken",
            format!("an account already exists for {}", email),
        )))
    } else {
        Ok(None)
    }
}

/// Invalid when the version label is already used within the file.
pub async fn available_version_string(
    versions: &VersionsClient<'_>,
    project_id: &str,
    task_id: &str,
    file_id: &str,
    field: &str,
    version_string: &str,
) -> Result<Option<FieldError>> {
    if versions
        .exists(project_id, task_id, file_id, version_string)
        .await?
    {
        Ok(Some(FieldError::new(
            field,
            "versionTaken",
            format!("version {} already exists for this file", version_string),
        )))
    } else {
        Ok(None)
    }
}
