//! Response DTOs.

use serde::{Deserialize, Serialize};

use taskhub_auth::login::AuthenticatedUser;
use taskhub_entity::task::{Task, TaskUpdate};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `true`.
    pub success: bool,
    /// Freshly issued identity token.
    pub token: String,
    /// The authenticated user (no password hash).
    pub user: AuthenticatedUser,
}

/// A task with its updates embedded, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskWithUpdates {
    /// The task itself.
    #[serde(flatten)]
    pub task: Task,
    /// All updates on the task.
    pub updates: Vec<TaskUpdate>,
    /// The most recent update, if any.
    pub last_update: Option<TaskUpdate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status string.
    pub status: String,
}
