//! Typed login failures.

use thiserror::Error;

use taskhub_core::error::AppError;

/// Outcome of a rejected login attempt.
///
/// The two authentication variants carry caller-facing messages; wrong email
/// and wrong password are deliberately merged into one variant so the caller
/// cannot tell which check failed.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The email/password pair did not authenticate.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The account is temporarily locked after repeated failures.
    #[error("Account locked. Try again in {minutes} minutes.")]
    AccountLocked {
        /// Remaining lockout time, rounded up to whole minutes.
        minutes: i64,
    },
    /// An infrastructure failure (store, RNG, signing key).
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<LoginError> for AppError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Internal(e) => e,
            other => AppError::unauthorized(other.to_string()),
        }
    }
}
