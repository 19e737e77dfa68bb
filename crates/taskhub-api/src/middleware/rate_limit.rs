//! Fixed-window rate limiter middleware.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use taskhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Simple in-memory fixed-window rate limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Client key → window state.
    windows: Arc<Mutex<HashMap<String, Window>>>,
    /// Maximum requests per window.
    max_requests: u32,
    /// Window length.
    window: Duration,
}

#[derive(Debug, Clone)]
struct Window {
    count: u32,
    started_at: Instant,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Attempts to consume a slot for the given key.
    pub async fn check(&self, key: &str) -> bool {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.duration_since(window.started_at) >= self.window {
            window.count = 0;
            window.started_at = now;
        }

        if window.count < self.max_requests {
            window.count += 1;
            true
        } else {
            false
        }
    }
}

/// API-wide rate limiting middleware.
pub async fn api_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    limit(&state.api_limiter, request, next).await
}

/// Stricter rate limiting for the login endpoint.
pub async fn login_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    limit(&state.login_limiter, request, next).await
}

async fn limit(limiter: &RateLimiter, request: Request, next: Next) -> Response {
    let key = client_key(&request);

    if limiter.check(&key).await {
        next.run(request).await
    } else {
        ApiError::from(AppError::rate_limited(
            "Too many requests, please try again later.",
        ))
        .into_response()
    }
}

/// Identifies the client for rate limiting purposes.
fn client_key(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
