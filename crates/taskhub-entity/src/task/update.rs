//! Task update (comment) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A progress update or comment posted on a task.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskUpdate {
    /// Unique update identifier.
    pub id: i64,
    /// The task this update belongs to.
    pub task_id: i64,
    /// The user who wrote the update.
    pub author_id: i64,
    /// Update text.
    pub message: String,
    /// When the update was posted.
    pub created_at: DateTime<Utc>,
}

/// Data required to post a new update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUpdate {
    /// The target task.
    pub task_id: i64,
    /// The authoring user.
    pub author_id: i64,
    /// Update text.
    pub message: String,
}
