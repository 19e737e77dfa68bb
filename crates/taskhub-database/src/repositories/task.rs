//! Task repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use taskhub_auth::jwt::Principal;
use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_entity::task::model::CreateTask;
use taskhub_entity::task::Task;
use taskhub_entity::user::UserRole;

/// Repository for task CRUD and visibility queries.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a task by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task by id", e))
    }

    /// List the tasks visible to the principal.
    ///
    /// The filter mirrors the access enforcer: moderators see everything,
    /// contributors see tasks they created or are assigned to, viewers see
    /// only tasks assigned to them.
    pub async fn list_visible(&self, principal: &Principal) -> AppResult<Vec<Task>> {
        let query = match principal.role {
            UserRole::Moderator => {
                sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY created_at DESC")
            }
            UserRole::Contributor => sqlx::query_as::<_, Task>(
                "SELECT * FROM tasks WHERE creator_id = ? OR assignee_id = ?
                 ORDER BY created_at DESC",
            )
            .bind(principal.id)
            .bind(principal.id),
            UserRole::Viewer => sqlx::query_as::<_, Task>(
                "SELECT * FROM tasks WHERE assignee_id = ? ORDER BY created_at DESC",
            )
            .bind(principal.id),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    /// Create a new task and return it.
    pub async fn create(&self, task: &CreateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, status, creator_id, assignee_id, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&task.title)
        .bind(task.status)
        .bind(task.creator_id)
        .bind(task.assignee_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use taskhub_entity::task::TaskStatus;
    use taskhub_entity::user::model::CreateUser;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::migration::run_migrations(&pool).await.unwrap();
        pool
    }

    async fn seed_user(pool: &SqlitePool, email: &str, role: UserRole) -> i64 {
        crate::repositories::user::UserRepository::new(pool.clone())
            .create(&CreateUser {
                email: email.to_string(),
                password_hash: "salt:key".to_string(),
                role,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_visibility_by_role() {
        let pool = test_pool().await;
        let repo = TaskRepository::new(pool.clone());

        let creator = seed_user(&pool, "creator@x.com", UserRole::Contributor).await;
        let assignee = seed_user(&pool, "assignee@x.com", UserRole::Viewer).await;
        let outsider = seed_user(&pool, "outsider@x.com", UserRole::Contributor).await;

        repo.create(&CreateTask {
            title: "Write the report".to_string(),
            status: TaskStatus::ToDo,
            creator_id: creator,
            assignee_id: Some(assignee),
        })
        .await
        .unwrap();

        let moderator = Principal {
            id: 999,
            role: UserRole::Moderator,
        };
        assert_eq!(repo.list_visible(&moderator).await.unwrap().len(), 1);

        let as_creator = Principal {
            id: creator,
            role: UserRole::Contributor,
        };
        assert_eq!(repo.list_visible(&as_creator).await.unwrap().len(), 1);

        let as_assignee = Principal {
            id: assignee,
            role: UserRole::Viewer,
        };
        assert_eq!(repo.list_visible(&as_assignee).await.unwrap().len(), 1);

        let as_outsider = Principal {
            id: outsider,
            role: UserRole::Contributor,
        };
        assert!(repo.list_visible(&as_outsider).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ownership_fields_roundtrip() {
        let pool = test_pool().await;
        let repo = TaskRepository::new(pool.clone());
        let creator = seed_user(&pool, "creator@x.com", UserRole::Contributor).await;

        let task = repo
            .create(&CreateTask {
                title: "Unassigned chore".to_string(),
                status: TaskStatus::InProgress,
                creator_id: creator,
                assignee_id: None,
            })
            .await
            .unwrap();

        let found = repo.find_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(found.status, TaskStatus::InProgress);
        assert_eq!(found.ownership().creator_id, creator);
        assert_eq!(found.ownership().assignee_id, None);
    }
}
