//! Task update handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use taskhub_core::error::AppError;
use taskhub_entity::task::update::CreateUpdate;
use taskhub_entity::task::TaskUpdate;

use crate::dto::request::CreateUpdateRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/updates
///
/// Posts an update on a task the caller can access.
pub async fn create_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUpdateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TaskUpdate>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let principal = auth.principal();

    let task = state
        .task_repo
        .find_by_id(req.task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task not found"))?;

    if !state.access.can_access(&principal, &task.ownership()) {
        return Err(AppError::forbidden("Forbidden").into());
    }

    let update = state
        .update_repo
        .create(&CreateUpdate {
            task_id: task.id,
            author_id: principal.id,
            message: req.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(update))))
}
