//! Task update (comment) repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_entity::task::update::CreateUpdate;
use taskhub_entity::task::TaskUpdate;

/// Repository for task updates.
#[derive(Debug, Clone)]
pub struct UpdateRepository {
    pool: SqlitePool,
}

impl UpdateRepository {
    /// Create a new update repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Post a new update and return it.
    pub async fn create(&self, update: &CreateUpdate) -> AppResult<TaskUpdate> {
        sqlx::query_as::<_, TaskUpdate>(
            "INSERT INTO updates (task_id, author_id, message, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(update.task_id)
        .bind(update.author_id)
        .bind(&update.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create update", e))
    }

    /// List a task's updates, newest first.
    pub async fn list_by_task(&self, task_id: i64) -> AppResult<Vec<TaskUpdate>> {
        sqlx::query_as::<_, TaskUpdate>(
            "SELECT * FROM updates WHERE task_id = ? ORDER BY created_at DESC",
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list updates", e))
    }
}
