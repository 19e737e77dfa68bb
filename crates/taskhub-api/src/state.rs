//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use taskhub_auth::access::AccessEnforcer;
use taskhub_auth::jwt::{JwtDecoder, JwtEncoder};
use taskhub_auth::lockout::LockoutTracker;
use taskhub_auth::login::LoginManager;
use taskhub_auth::password::PasswordHasher;
use taskhub_core::config::AppConfig;
use taskhub_database::repositories::{TaskRepository, UpdateRepository, UserRepository};

use crate::middleware::rate_limit::RateLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool.
    pub db_pool: SqlitePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Identity token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Identity token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher.
    pub password_hasher: Arc<PasswordHasher>,
    /// Failed-login lockout tracker.
    pub lockout: Arc<LockoutTracker>,
    /// Login flow orchestrator.
    pub login_manager: Arc<LoginManager>,
    /// Role/ownership access decisions.
    pub access: Arc<AccessEnforcer>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Task repository.
    pub task_repo: Arc<TaskRepository>,
    /// Task update repository.
    pub update_repo: Arc<UpdateRepository>,

    // ── Rate limiting ────────────────────────────────────────
    /// API-wide rate limiter.
    pub api_limiter: Arc<RateLimiter>,
    /// Stricter rate limiter for the login endpoint.
    pub login_limiter: Arc<RateLimiter>,
}
