//! Idempotent schema bootstrap.
//!
//! The schema is applied with `CREATE ... IF NOT EXISTS` statements at
//! startup, so running it against an already-initialized database is a
//! no-op.

use sqlx::SqlitePool;
use tracing::info;

use taskhub_core::error::{AppError, ErrorKind};

/// Schema statements, executed in order.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL CHECK (role IN ('viewer', 'contributor', 'moderator')),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'to do'
            CHECK (status IN ('to do', 'in progress', 'done')),
        creator_id INTEGER NOT NULL REFERENCES users (id),
        assignee_id INTEGER REFERENCES users (id),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS updates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task_id INTEGER NOT NULL REFERENCES tasks (id),
        author_id INTEGER NOT NULL REFERENCES users (id),
        message TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE INDEX IF NOT EXISTS idx_users_email ON users (email)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_creator ON tasks (creator_id)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_assignee ON tasks (assignee_id)",
    "CREATE INDEX IF NOT EXISTS idx_updates_task ON updates (task_id)",
];

/// Apply the schema to the given pool.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply schema statement: {e}"),
                e,
            )
        })?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}
