//! Integration tests for task and update access control.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_viewer_cannot_create_tasks() {
    let app = TestApp::new().await;
    app.create_test_user("viewer@example.com", "viewer123", "viewer")
        .await;
    let token = app.login("viewer@example.com", "viewer123").await;

    let response = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({ "title": "Sneaky task" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_contributor_creates_and_lists_own_tasks() {
    let app = TestApp::new().await;
    let assignee = app
        .create_test_user("viewer@example.com", "viewer123", "viewer")
        .await;
    app.create_test_user("contrib@example.com", "contrib123", "contributor")
        .await;
    app.create_test_user("other@example.com", "other123", "contributor")
        .await;

    let token = app.login("contrib@example.com", "contrib123").await;
    let response = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({
                "title": "Write the report",
                "status": "in progress",
                "assignee_id": assignee,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["status"], "in progress");

    // The creator sees the task.
    let response = app.request("GET", "/api/tasks", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    // The assignee sees it too.
    let viewer_token = app.login("viewer@example.com", "viewer123").await;
    let response = app
        .request("GET", "/api/tasks", None, Some(&viewer_token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    // An unrelated contributor sees nothing.
    let other_token = app.login("other@example.com", "other123").await;
    let response = app
        .request("GET", "/api/tasks", None, Some(&other_token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_access_follows_ownership() {
    let app = TestApp::new().await;
    let assignee = app
        .create_test_user("viewer@example.com", "viewer123", "viewer")
        .await;
    app.create_test_user("contrib@example.com", "contrib123", "contributor")
        .await;
    app.create_test_user("outsider@example.com", "outsider123", "viewer")
        .await;

    let contrib_token = app.login("contrib@example.com", "contrib123").await;
    let response = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({ "title": "Review the draft", "assignee_id": assignee })),
            Some(&contrib_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let task_id = response.body["data"]["id"].as_i64().unwrap();

    // The assignee may comment.
    let viewer_token = app.login("viewer@example.com", "viewer123").await;
    let response = app
        .request(
            "POST",
            "/api/updates",
            Some(serde_json::json!({ "task_id": task_id, "message": "Looks good" })),
            Some(&viewer_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // A viewer who is not the assignee may not.
    let outsider_token = app.login("outsider@example.com", "outsider123").await;
    let response = app
        .request(
            "POST",
            "/api/updates",
            Some(serde_json::json!({ "task_id": task_id, "message": "Nope" })),
            Some(&outsider_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Unknown task.
    let response = app
        .request(
            "POST",
            "/api/updates",
            Some(serde_json::json!({ "task_id": 9999, "message": "Ghost" })),
            Some(&contrib_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The creator's listing embeds the update.
    let response = app
        .request("GET", "/api/tasks", None, Some(&contrib_token))
        .await;
    let tasks = response.body["data"].as_array().unwrap();
    assert_eq!(tasks[0]["updates"].as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["last_update"]["message"], "Looks good");
}
