//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::TaskStatus;

/// A tracked task.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: i64,
    /// Short task title.
    pub title: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// The user who created the task.
    pub creator_id: i64,
    /// The user the task is assigned to, if any.
    pub assignee_id: Option<i64>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Return the ownership fields consulted by access decisions.
    pub fn ownership(&self) -> TaskOwnership {
        TaskOwnership {
            creator_id: self.creator_id,
            assignee_id: self.assignee_id,
        }
    }
}

/// The ownership fields of a task that access decisions consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOwnership {
    /// The user who created the resource.
    pub creator_id: i64,
    /// The user the resource is assigned to, if any.
    pub assignee_id: Option<i64>,
}

/// Data required to create a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Short task title.
    pub title: String,
    /// Initial workflow status.
    pub status: TaskStatus,
    /// The creating user.
    pub creator_id: i64,
    /// Optional assignee.
    pub assignee_id: Option<i64>,
}
