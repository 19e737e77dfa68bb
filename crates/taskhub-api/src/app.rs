//! Application builder — wires state + router into an Axum app and runs it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;

use taskhub_auth::access::AccessEnforcer;
use taskhub_auth::jwt::{JwtDecoder, JwtEncoder};
use taskhub_auth::lockout::LockoutTracker;
use taskhub_auth::login::LoginManager;
use taskhub_auth::password::PasswordHasher;
use taskhub_auth::store::UserStore;
use taskhub_core::config::AppConfig;
use taskhub_core::error::AppError;
use taskhub_database::repositories::{TaskRepository, UpdateRepository, UserRepository};

use crate::middleware::rate_limit::RateLimiter;
use crate::router::build_router;
use crate::state::AppState;

/// Constructs the full application state from configuration and a
/// connected database pool.
pub fn build_state(config: AppConfig, db_pool: SqlitePool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let task_repo = Arc::new(TaskRepository::new(db_pool.clone()));
    let update_repo = Arc::new(UpdateRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let lockout = Arc::new(LockoutTracker::new(
        config.auth.max_failed_attempts,
        chrono::Duration::minutes(config.auth.lockout_duration_minutes as i64),
    ));

    let login_manager = Arc::new(LoginManager::new(
        Arc::clone(&user_repo) as Arc<dyn UserStore>,
        Arc::clone(&password_hasher),
        Arc::clone(&lockout),
        Arc::clone(&jwt_encoder),
    ));

    let api_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.api_max_requests,
        Duration::from_secs(config.rate_limit.api_window_seconds),
    ));
    let login_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.login_max_requests,
        Duration::from_secs(config.rate_limit.login_window_seconds),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        lockout,
        login_manager,
        access: Arc::new(AccessEnforcer::new()),
        user_repo,
        task_repo,
        update_repo,
        api_limiter,
        login_limiter,
    }
}

/// Builds the Axum application for the given state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the TaskHub server until ctrl-c.
pub async fn run_server(config: AppConfig, db_pool: SqlitePool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool);
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "TaskHub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
    }
    tracing::info!("Shutdown signal received");
}
