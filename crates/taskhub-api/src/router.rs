//! Route definitions for the TaskHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;

    // The login endpoint carries its own stricter limiter on top of the
    // API-wide one.
    let login_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::login_rate_limit,
        ));

    let api_routes = Router::new()
        .merge(login_routes)
        .route("/tasks", get(handlers::task::list_tasks))
        .route("/tasks", post(handlers::task::create_task))
        .route("/updates", post(handlers::update::create_update));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::api_rate_limit,
        ))
        .with_state(state)
}

/// Permissive CORS, matching the development posture of the service.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
