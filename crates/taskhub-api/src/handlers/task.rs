//! Task handlers — listing and creation.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use taskhub_core::error::AppError;
use taskhub_entity::task::model::CreateTask;
use taskhub_entity::task::Task;
use taskhub_entity::user::UserRole;

use crate::dto::request::CreateTaskRequest;
use crate::dto::response::{ApiResponse, TaskWithUpdates};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/tasks
///
/// Lists the tasks visible to the caller's role, with updates embedded.
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<TaskWithUpdates>>>, ApiError> {
    let principal = auth.principal();
    let tasks = state.task_repo.list_visible(&principal).await?;

    let mut with_updates = Vec::with_capacity(tasks.len());
    for task in tasks {
        let updates = state.update_repo.list_by_task(task.id).await?;
        with_updates.push(TaskWithUpdates {
            last_update: updates.first().cloned(),
            task,
            updates,
        });
    }

    Ok(Json(ApiResponse::ok(with_updates)))
}

/// POST /api/tasks
///
/// Creates a task with the caller as creator. Contributors and moderators
/// only.
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Task>>), ApiError> {
    let principal = auth.principal();

    if !state
        .access
        .is_allowed_role(&principal, &[UserRole::Contributor, UserRole::Moderator])
    {
        return Err(AppError::forbidden("Forbidden").into());
    }

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let task = state
        .task_repo
        .create(&CreateTask {
            title: req.title,
            status: req.status.unwrap_or_default(),
            creator_id: principal.id,
            assignee_id: req.assignee_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(task))))
}
