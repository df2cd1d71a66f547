//! Resource client tests against a mocked backend.
//!
//! Covers the project and task endpoints, the token header, error shaping,
//! and the navigate-back behavior of task deletion.

mod common;

use common::logged_in_client;
use dws::cli::{commands, Output};
use dws::types::{Error, NewProject, NewTask};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project_body(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "test project",
        "administrator": {"email": "alice@example.com", "name": "Alice"},
        "creationDate": "2024-03-01T10:00:00Z",
        "numberOfParticipants": 2,
        "tasks": [
            {
                "id": "task-1",
                "name": "review",
                "creationDate": "2024-03-02T09:00:00Z",
                "numberOfFiles": 1
            }
        ]
    })
}

fn task_body(id: &str, project_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "projectId": project_id,
        "name": "review",
        "administrator": {"email": "alice@example.com"},
        "creationDate": "2024-03-02T09:00:00Z",
        "numberOfParticipants": 2,
        "files": [{"id": "file-1", "name": "draft.txt"}]
    })
}

#[tokio::test]
async fn test_list_projects_sends_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header_exists("X-AUTH-TOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "p1",
                "name": "thesis",
                "creationDate": "2024-03-01T10:00:00Z",
                "numberOfParticipants": 1,
                "numberOfTasks": 3,
                "numberOfFiles": 5
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");
    let projects = api.projects().list().await.expect("list should succeed");

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "thesis");
    assert_eq!(projects[0].number_of_tasks, 3);
}

#[tokio::test]
async fn test_create_project_returns_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(body_partial_json(json!({"name": "thesis"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p-new"})))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");
    let id = api
        .projects()
        .create(&NewProject {
            name: "thesis".to_string(),
            description: None,
        })
        .await
        .expect("create should succeed");

    assert_eq!(id, "p-new");
}

#[tokio::test]
async fn test_get_missing_project_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");
    let error = api.projects().get("nope").await.expect_err("should fail");

    assert!(matches!(error, Error::NotFound(resource) if resource == "project"));
}

#[tokio::test]
async fn test_server_rejecting_token_maps_to_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");
    let error = api.projects().list().await.expect_err("should fail");

    assert!(matches!(error, Error::Unauthenticated));
}

#[tokio::test]
async fn test_task_roundtrip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/p1/tasks"))
        .and(body_partial_json(json!({
            "name": "review",
            "administratorEmail": "alice@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "task-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/projects/p1/tasks/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body("task-1", "p1")))
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");

    let id = api
        .tasks()
        .create(
            "p1",
            &NewTask {
                name: "review".to_string(),
                description: None,
                administrator_email: "alice@example.com".to_string(),
            },
        )
        .await
        .expect("create should succeed");
    assert_eq!(id, "task-1");

    let task = api.tasks().get("p1", "task-1").await.expect("get should succeed");
    assert_eq!(task.project_id, "p1");
    assert_eq!(task.files.len(), 1);
}

#[tokio::test]
async fn test_task_delete_renders_parent_project_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/projects/p1/tasks/task-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    // The navigate-back analog: the parent project is fetched afterwards.
    Mock::given(method("GET"))
        .and(path("/api/projects/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body("p1", "thesis")))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");
    let out = Output::new(false);

    commands::task_delete(&api, &out, "p1", "task-1", true)
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn test_task_delete_failure_fetches_nothing_else() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/projects/p1/tasks/task-1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"code": "task.deleteFailed"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // On failure the view stays put: no project fetch happens.
    Mock::given(method("GET"))
        .and(path("/api/projects/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body("p1", "thesis")))
        .expect(0)
        .mount(&server)
        .await;

    let (_dir, api) = logged_in_client(&server.uri(), "alice@example.com");
    let out = Output::new(false);

    let error = commands::task_delete(&api, &out, "p1", "task-1", true)
        .await
        .expect_err("delete should fail");
    assert!(matches!(error, Error::Api { code, .. } if code == "task.deleteFailed"));
}

#[tokio::test]
async fn test_guarded_command_refuses_without_session() {
    // No server interaction at all: the guard rejects first.
    let (_dir, api) = common::anonymous_client("http://127.0.0.1:1");
    let out = Output::new(false);

    let error = commands::project_list(&api, &out)
        .await
        .expect_err("should be rejected");
    assert!(matches!(error, Error::Unauthenticated));
}
