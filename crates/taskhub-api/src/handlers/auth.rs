//! Auth handlers — login.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use taskhub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.login_manager.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        token: result.token,
        user: result.user,
    }))
}
