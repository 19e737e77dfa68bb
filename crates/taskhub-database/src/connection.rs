//! SQLite connection pool management.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use taskhub_core::config::DatabaseConfig;
use taskhub_core::error::{AppError, ErrorKind};

/// Create a new SQLite connection pool from configuration.
///
/// The database file is created if missing, and foreign key enforcement
/// is enabled on every connection.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    info!(
        path = %config.path,
        max_connections = config.max_connections,
        "Connecting to SQLite"
    );

    if let Some(parent) = std::path::Path::new(&config.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to create database directory: {e}"),
                    e,
                )
            })?;
        }
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", config.path))
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Invalid database path: {e}"),
                e,
            )
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Successfully connected to SQLite");
    Ok(pool)
}

/// Check database connectivity.
pub async fn health_check(pool: &SqlitePool) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|v| v == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
}
