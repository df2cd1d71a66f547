//! Human-readable messages for server error codes.
//!
//! The backend reports failures as dotted error codes with positional
//! parameters; known codes get a translated message, unknown ones are shown
//! verbatim so nothing is swallowed.

/// Translates a server error code, interpolating `{0}`, `{1}`, … with the
/// reported parameters.
pub fn describe(code: &str, params: &[String]) -> String {
    let template = match code {
        "auth.badCredentials" => "invalid email or password",
        "auth.tokenExpired" => "your session has expired",
        "user.notFound" => "no account exists for {0}",
        "user.emailAlreadyExists" => "an account already exists for {0}",
        "project.notFound" => "project {0} does not exist",
        "project.nameAlreadyExists" => "a project named {0} already exists",
        "task.notFound" => "task {0} does not exist",
        "file.notFound" => "file {0} does not exist",
        "version.versionStringAlreadyExists" => "version {0} already exists for this file",
        _ => return fallback(code, params),
    };
    interpolate(template, params)
}

fn fallback(code: &str, params: &[String]) -> String {
    if let Some(status) = code.strip_prefix("http.") {
        format!("unexpected server response (HTTP {})", status)
    } else if params.is_empty() {
        code.to_string()
    } else {
        format!("{} [{}]", code, params.join(", "))
    }
}

fn interpolate(template: &str, params: &[String]) -> String {
    let mut message = template.to_string();
    for (index, param) in params.iter().enumerate() {
        message = message.replace(&format!("{{{}}}", index), param);
    }
    message
}
