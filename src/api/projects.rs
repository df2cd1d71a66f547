//! Project resource client.

use super::ApiClient;
use crate::types::{CreatedId, NewProject, ProjectInfo, ProjectSummary, Result};

/// REST wrapper for the project endpoints.
pub struct ProjectsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ProjectsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Lists all projects visible to the current user.
    pub async fn list(&self) -> Result<Vec<ProjectSummary>> {
        self.api.get_json("/api/projects", "projects").await
    }

    /// Creates a project and returns the new project's id.
    pub async fn create(&self, project: &NewProject) -> Result<String> {
        let created: CreatedId = self
            .api
            .post_json("/api/projects", project, "projects")
            .await?;
        Ok(created.id)
    }

    /// Fetches one project's details, including its task summaries.
    pub async fn get(&self, project_id: &str) -> Result<ProjectInfo> {
        self.api
            .get_json(&format!("/api/projects/{}", project_id), "project")
            .await
    }

    /// Deletes a project.
    pub async fn delete(&self, project_id: &str) -> Result<()> {
        self.api
            .delete(&format!("/api/projects/{}", project_id), "project")
            .await
    }
}
