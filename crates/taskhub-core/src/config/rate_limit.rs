//! Rate limiting configuration.

use serde::{Deserialize, Serialize};

/// Fixed-window rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum API requests per client per window.
    #[serde(default = "default_api_max")]
    pub api_max_requests: u32,
    /// API window length in seconds.
    #[serde(default = "default_api_window")]
    pub api_window_seconds: u64,
    /// Maximum login attempts per client per window.
    #[serde(default = "default_login_max")]
    pub login_max_requests: u32,
    /// Login window length in seconds.
    #[serde(default = "default_login_window")]
    pub login_window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            api_max_requests: default_api_max(),
            api_window_seconds: default_api_window(),
            login_max_requests: default_login_max(),
            login_window_seconds: default_login_window(),
        }
    }
}

fn default_api_max() -> u32 {
    30
}

fn default_api_window() -> u64 {
    60
}

fn default_login_max() -> u32 {
    5
}

fn default_login_window() -> u64 {
    15 * 60
}
