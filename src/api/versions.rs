//! File-version client: the multipart upload and the label-uniqueness probe.

use super::ApiClient;
use crate::types::{CreatedId, NewVersion, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;

/// REST wrapper for the version endpoints under a (project, task, file)
/// triple.
pub struct VersionsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> VersionsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn base_path(project_id: &str, task_id: &str, file_id: &str) -> String {
        format!(
            "/api/projects/{}/tasks/{}/files/{}/versions",
            project_id, task_id, file_id
        )
    }

    /// Uploads a new version of a file and returns the created version's id.
    ///
    /// Sent as multipart form data: the binary `file` part plus
    /// `versionString` and `message` text parts.
    pub async fn add(&self, version: &NewVersion) -> Result<String> {
        let bytes = tokio::fs::read(&version.file_path).await?;
        let file_name = version
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .text("versionString", version.version_string.clone())
            .text("message", version.message.clone())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let path = Self::base_path(&version.project_id, &version.task_id, &version.file_id);
        let builder = self.api.request(Method::POST, &path).multipart(form);
        let response = self.api.execute(builder, "version").await?;
        let created: CreatedId = response.json().await?;
        Ok(created.id)
    }

    /// Checks whether a version label is already taken within a file.
    ///
    /// UX probe only — the server enforces uniqueness authoritatively on
    /// upload.
    pub async fn exists(
        &self,
        project_id: &str,
        task_id: &str,
        file_id: &str,
        version_string: &str,
    ) -> Result<bool> {
        let path = format!("{}/exists", Self::base_path(project_id, task_id, file_id));
        let builder = self
            .api
            .request(Method::GET, &path)
            .query(&[("versionString", version_string)]);
        let response = self.api.execute(builder, "version").await?;
        Ok(response.json().await?)
    }
}
