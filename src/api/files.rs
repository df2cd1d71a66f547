//! File metadata client.

use super::ApiClient;
use crate::types::{FileInfo, Result};

/// REST wrapper for the file endpoints under a (project, task) pair.
pub struct FilesClient<'a> {
    api: &'a ApiClient,
}

impl<'a> FilesClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetches one file's metadata, including its version list.
    pub async fn get(&self, project_id: &str, task_id: &str, file_id: &str) -> Result<FileInfo> {
        self.api
            .get_json(
                &format!(
                    "/api/projects/{}/tasks/{}/files/{}",
                    project_id, task_id, file_id
                ),
                "file",
            )
            .await
    }

    /// Deletes a file and all of its versions.
    pub async fn delete(&self, project_id: &str, task_id: &str, file_id: &str) -> Result<()> {
        self.api
            .delete(
                &format!(
                    "/api/projects/{}/tasks/{}/files/{}",
                    project_id, task_id, file_id
                ),
                "file",
            )
            .await
    }
}
