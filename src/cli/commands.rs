//! Command handlers — the terminal counterparts of the original views.
//!
//! Every handler follows the same shape: session guard, client-side
//! validation, a single client call, then either a rendered result or a
//! navigation analog (e.g. task deletion renders the parent project's
//! details, the way the UI navigated back to it).

use super::messages;
use super::output::Output;
use crate::api::ApiClient;
use crate::auth::{AuthClient, AuthGuard};
use crate::types::{
    Error, FieldError, FileInfo, NewProject, NewTask, NewUser, NewVersion, ProjectInfo, Result,
    TaskInfo, UserInfo,
};
use crate::validate;
use chrono::{DateTime, Utc};
use dialoguer::{Confirm, Password};
use std::path::PathBuf;

// ============= Auth Commands =============

pub async fn login(api: &ApiClient, out: &Output, email: &str, password: Option<String>) -> Result<()> {
    let mut form = validate::Form::new();
    form.check(validate::required("email", email))
        .check(validate::email_format("email", email));
    form.finish()?;

    let password = match password {
        Some(password) => password,
        None => prompt_password("Password")?,
    };

    let auth = AuthClient::new(api);
    auth.login(email, &password).await?;
    out.success(&format!("logged in as {}", email));
    Ok(())
}

pub fn logout(api: &ApiClient, out: &Output) {
    AuthClient::new(api).logout();
    out.success("logged out");
}

pub async fn register(
    api: &ApiClient,
    out: &Output,
    email: &str,
    name: &str,
    password: Option<String>,
    password_repeated: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password")?,
    };
    let password_repeated = match password_repeated {
        Some(repeated) => repeated,
        None => prompt_password("Repeat password")?,
    };

    let mut form = validate::Form::new();
    form.check(validate::required("email", email))
        .check(validate::email_format("email", email))
        .check(validate::required("name", name))
        .check(validate::min_length(
            "password",
            &password,
            validate::PASSWORD_MIN,
        ))
        .check(validate::passwords_match(&password, &password_repeated));
    form.finish()?;

    // One server probe per pass, after the synchronous rules are clean.
    let auth = AuthClient::new(api);
    let mut form = validate::Form::new();
    form.check(validate::available_user_email(&auth, "email", email).await?);
    form.finish()?;

    auth.register(&NewUser {
        email: email.to_string(),
        name: name.to_string(),
        password,
    })
    .await?;

    out.success(&format!("account created for {}", email));
    out.hint(&format!("run `dws login {}` to start a session", email));
    Ok(())
}

pub fn whoami(api: &ApiClient, out: &Output) -> Result<()> {
    let claims = AuthGuard::new(api.session()).require()?;

    out.header("Session");
    out.kv("email", &claims.sub);
    if let Some(name) = &claims.name {
        out.kv("name", name);
    }
    if let Some(expires) = DateTime::<Utc>::from_timestamp(claims.exp, 0) {
        out.kv("expires", &format_date(&expires));
    }
    Ok(())
}

// ============= Project Commands =============

pub async fn project_list(api: &ApiClient, out: &Output) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    let projects = api.projects().list().await?;
    if projects.is_empty() {
        out.info("no projects yet");
        return Ok(());
    }

    out.table_header(&[
        ("ID", 26),
        ("NAME", 28),
        ("TASKS", 6),
        ("FILES", 6),
        ("MEMBERS", 8),
        ("CREATED", 16),
    ]);
    for project in &projects {
        out.table_row(&[
            (&project.id, 26),
            (&project.name, 28),
            (&project.number_of_tasks.to_string(), 6),
            (&project.number_of_files.to_string(), 6),
            (&project.number_of_participants.to_string(), 8),
            (&format_date(&project.creation_date), 16),
        ]);
    }
    Ok(())
}

pub async fn project_create(
    api: &ApiClient,
    out: &Output,
    name: &str,
    description: Option<String>,
) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    let mut form = validate::Form::new();
    form.check(validate::required("name", name))
        .check(validate::max_length("name", name, validate::PROJECT_NAME_MAX));
    if let Some(description) = &description {
        form.check(validate::max_length(
            "description",
            description,
            validate::DESCRIPTION_MAX,
        ));
    }
    form.finish()?;

    let project_id = api
        .projects()
        .create(&NewProject {
            name: name.to_string(),
            description,
        })
        .await?;
    out.success(&format!("project created ({})", project_id));

    let project = api.projects().get(&project_id).await?;
    render_project(out, &project);
    Ok(())
}

pub async fn project_show(api: &ApiClient, out: &Output, project_id: &str) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    let project = api.projects().get(project_id).await?;
    render_project(out, &project);
    Ok(())
}

pub async fn project_delete(api: &ApiClient, out: &Output, project_id: &str, yes: bool) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    if !yes && !confirm(&format!("Delete project {}?", project_id))? {
        out.info("aborted");
        return Ok(());
    }

    api.projects().delete(project_id).await?;
    out.success("project deleted");
    Ok(())
}

// ============= Task Commands =============

pub async fn task_create(
    api: &ApiClient,
    out: &Output,
    project_id: &str,
    name: &str,
    description: Option<String>,
    admin: Option<String>,
) -> Result<()> {
    let claims = AuthGuard::new(api.session()).require()?;
    let administrator_email = admin.unwrap_or(claims.sub);

    let mut form = validate::Form::new();
    form.check(validate::required("name", name))
        .check(validate::max_length("name", name, validate::TASK_NAME_MAX))
        .check(validate::email_format("administratorEmail", &administrator_email));
    if let Some(description) = &description {
        form.check(validate::max_length(
            "description",
            description,
            validate::DESCRIPTION_MAX,
        ));
    }
    form.finish()?;

    let auth = AuthClient::new(api);
    let mut form = validate::Form::new();
    form.check(
        validate::existing_user_email(&auth, "administratorEmail", &administrator_email).await?,
    );
    form.finish()?;

    let task_id = api
        .tasks()
        .create(
            project_id,
            &NewTask {
                name: name.to_string(),
                description,
                administrator_email,
            },
        )
        .await?;
    out.success(&format!("task created ({})", task_id));

    let task = api.tasks().get(project_id, &task_id).await?;
    render_task(out, &task);
    Ok(())
}

pub async fn task_show(api: &ApiClient, out: &Output, project_id: &str, task_id: &str) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    let task = api.tasks().get(project_id, task_id).await?;
    render_task(out, &task);
    Ok(())
}

/// Deletes a task; on success renders the parent project's details (the
/// navigate-back analog). On failure nothing else is fetched.
pub async fn task_delete(
    api: &ApiClient,
    out: &Output,
    project_id: &str,
    task_id: &str,
    yes: bool,
) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    if !yes && !confirm(&format!("Delete task {}?", task_id))? {
        out.info("aborted");
        return Ok(());
    }

    api.tasks().delete(project_id, task_id).await?;
    out.success("task deleted");

    let project = api.projects().get(project_id).await?;
    render_project(out, &project);
    Ok(())
}

// ============= File Commands =============

pub async fn file_show(
    api: &ApiClient,
    out: &Output,
    project_id: &str,
    task_id: &str,
    file_id: &str,
) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    let file = api.files().get(project_id, task_id, file_id).await?;
    render_file(out, &file);
    Ok(())
}

pub async fn file_delete(
    api: &ApiClient,
    out: &Output,
    project_id: &str,
    task_id: &str,
    file_id: &str,
    yes: bool,
) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    if !yes && !confirm(&format!("Delete file {} and all its versions?", file_id))? {
        out.info("aborted");
        return Ok(());
    }

    api.files().delete(project_id, task_id, file_id).await?;
    out.success("file deleted");

    let task = api.tasks().get(project_id, task_id).await?;
    render_task(out, &task);
    Ok(())
}

// ============= Version Commands =============

pub async fn version_add(
    api: &ApiClient,
    out: &Output,
    project_id: &str,
    task_id: &str,
    file_id: &str,
    path: PathBuf,
    label: &str,
    message: &str,
) -> Result<()> {
    AuthGuard::new(api.session()).require()?;

    let mut form = validate::Form::new();
    form.check(validate::required("versionString", label))
        .check(validate::max_length(
            "versionString",
            label,
            validate::VERSION_LABEL_MAX,
        ))
        .check(validate::required("message", message))
        .check(validate::max_length("message", message, validate::MESSAGE_MAX));
    if !path.is_file() {
        form.check(Some(FieldError::new(
            "file",
            "notFound",
            format!("{} is not a readable file", path.display()),
        )));
    }
    form.finish()?;

    // Uniqueness probe before the upload is attempted.
    let versions = api.versions();
    let mut form = validate::Form::new();
    form.check(
        validate::available_version_string(
            &versions,
            project_id,
            task_id,
            file_id,
            "versionString",
            label,
        )
        .await?,
    );
    form.finish()?;

    let version_id = versions
        .add(&NewVersion {
            project_id: project_id.to_string(),
            task_id: task_id.to_string(),
            file_id: file_id.to_string(),
            version_string: label.to_string(),
            message: message.to_string(),
            file_path: path,
        })
        .await?;
    out.success(&format!("version {} uploaded ({})", label, version_id));

    let file = api.files().get(project_id, task_id, file_id).await?;
    render_file(out, &file);
    Ok(())
}

// ============= Rendering =============

fn render_project(out: &Output, project: &ProjectInfo) {
    out.header(&project.name);
    out.kv("id", &project.id);
    if let Some(description) = &project.description {
        out.kv("description", description);
    }
    out.kv("administrator", &user_label(&project.administrator));
    out.kv("created", &format_date(&project.creation_date));
    if let Some(modified) = &project.modification_date {
        out.kv("modified", &format_date(modified));
    }
    out.kv("members", &project.number_of_participants.to_string());

    if project.tasks.is_empty() {
        out.info("no tasks yet");
    } else {
        out.header("Tasks");
        out.table_header(&[("ID", 26), ("NAME", 28), ("FILES", 6), ("CREATED", 16)]);
        for task in &project.tasks {
            out.table_row(&[
                (&task.id, 26),
                (&task.name, 28),
                (&task.number_of_files.to_string(), 6),
                (&format_date(&task.creation_date), 16),
            ]);
        }
    }
}

fn render_task(out: &Output, task: &TaskInfo) {
    out.header(&task.name);
    out.kv("id", &task.id);
    out.kv("project", &task.project_id);
    if let Some(description) = &task.description {
        out.kv("description", description);
    }
    out.kv("administrator", &user_label(&task.administrator));
    out.kv("created", &format_date(&task.creation_date));
    out.kv("members", &task.number_of_participants.to_string());

    if task.files.is_empty() {
        out.info("no files yet");
    } else {
        out.header("Files");
        out.table_header(&[("ID", 26), ("NAME", 40)]);
        for file in &task.files {
            out.table_row(&[(&file.id, 26), (&file.name, 40)]);
        }
    }
}

fn render_file(out: &Output, file: &FileInfo) {
    out.header(&file.name);
    out.kv("id", &file.id);

    if file.versions.is_empty() {
        out.info("no versions yet");
    } else {
        out.header("Versions");
        out.table_header(&[("ID", 26), ("LABEL", 14), ("SAVED", 16), ("AUTHOR", 24), ("MESSAGE", 32)]);
        for version in &file.versions {
            let author = version.author.as_ref().map(user_label).unwrap_or_default();
            let message = version.message.as_deref().unwrap_or("");
            out.table_row(&[
                (&version.id, 26),
                (&version.version_string, 14),
                (&format_date(&version.save_date), 16),
                (&author, 24),
                (message, 32),
            ]);
        }
    }
}

fn user_label(user: &UserInfo) -> String {
    match &user.name {
        Some(name) => format!("{} <{}>", name, user.email),
        None => user.email.clone(),
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

// ============= Error Reporting =============

/// Renders a failure the way the original surfaced it: field errors inline,
/// an expired/absent session as a redirect to login, server codes through
/// the message table.
pub fn report_error(out: &Output, error: &Error) {
    match error {
        Error::Unauthenticated => {
            out.error("not logged in (or the session has expired)");
            out.hint("run `dws login <email>` first");
        }
        Error::FieldValidation(errors) => out.field_errors(errors),
        Error::Api { code, params } => out.error(&messages::describe(code, params)),
        Error::NotFound(resource) => out.error(&format!("{} not found", resource)),
        other => out.error(&other.to_string()),
    }
}

// ============= Prompt Helpers =============

fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}
