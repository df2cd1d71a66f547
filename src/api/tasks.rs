//! Task resource client. A task always belongs to exactly one project, so
//! every path is rooted under its parent project.

use super::ApiClient;
use crate::types::{CreatedId, NewTask, Result, TaskInfo};

/// REST wrapper for the task endpoints.
pub struct TasksClient<'a> {
    api: &'a ApiClient,
}

impl<'a> TasksClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Creates a task under a project and returns the new task's id.
    pub async fn create(&self, project_id: &str, task: &NewTask) -> Result<String> {
        let created: CreatedId = self
            .api
            .post_json(&format!("/api/projects/{}/tasks", project_id), task, "tasks")
            .await?;
        Ok(created.id)
    }

    /// Fetches one task's details, including its file summaries.
    pub async fn get(&self, project_id: &str, task_id: &str) -> Result<TaskInfo> {
        self.api
            .get_json(
                &format!("/api/projects/{}/tasks/{}", project_id, task_id),
                "task",
            )
            .await
    }

    /// Deletes a task.
    pub async fn delete(&self, project_id: &str, task_id: &str) -> Result<()> {
        self.api
            .delete(
                &format!("/api/projects/{}/tasks/{}", project_id, task_id),
                "task",
            )
            .await
    }
}
