//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use taskhub_entity::task::TaskStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Task creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Initial status (defaults to "to do").
    pub status: Option<TaskStatus>,
    /// Optional assignee.
    pub assignee_id: Option<i64>,
}

/// Task update (comment) creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUpdateRequest {
    /// Target task.
    pub task_id: i64,
    /// Update text.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
