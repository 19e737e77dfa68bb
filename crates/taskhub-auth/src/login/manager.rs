//! The login flow composing lockout, store, hasher, and token issuance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use taskhub_entity::user::{User, UserRole};

use crate::error::LoginError;
use crate::jwt::JwtEncoder;
use crate::lockout::LockoutTracker;
use crate::password::PasswordHasher;
use crate::store::UserStore;

/// The sanitized user returned to the caller on login — never includes
/// the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Unique user identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// User role.
    pub role: UserRole,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    /// Freshly issued identity token.
    pub token: String,
    /// The authenticated user.
    pub user: AuthenticatedUser,
}

/// Orchestrates the login flow.
#[derive(Clone)]
pub struct LoginManager {
    /// User lookup.
    user_store: Arc<dyn UserStore>,
    /// Credential verification.
    password_hasher: Arc<PasswordHasher>,
    /// Failed-attempt and lockout state.
    lockout: Arc<LockoutTracker>,
    /// Token issuance.
    jwt_encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for LoginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginManager").finish()
    }
}

impl LoginManager {
    /// Creates a new login manager with its collaborators.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        password_hasher: Arc<PasswordHasher>,
        lockout: Arc<LockoutTracker>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            lockout,
            jwt_encoder,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Reject if the email is locked out.
    /// 2. Look up the user record.
    /// 3. Verify the password.
    /// 4. On success: clear lockout state, issue a fresh token.
    ///
    /// Unknown emails and wrong passwords both record a failed attempt and
    /// fail with the same message, so the caller cannot probe which
    /// addresses exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, LoginError> {
        // Step 1: Lockout check
        if let Some(remaining) = self.lockout.remaining_lockout(email).await {
            let minutes = ceil_minutes(remaining);
            warn!(email = %email, minutes, "Login rejected: account locked");
            return Err(LoginError::AccountLocked { minutes });
        }

        // Step 2: Find user
        let user = self
            .user_store
            .get_user_by_email(email)
            .await
            .map_err(LoginError::Internal)?;

        let Some(user) = user else {
            self.lockout.record_failure(email).await;
            info!(email = %email, "Login failed");
            return Err(LoginError::InvalidCredentials);
        };

        // Step 3: Verify password
        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)
        {
            self.lockout.record_failure(email).await;
            info!(email = %email, "Login failed");
            return Err(LoginError::InvalidCredentials);
        }

        // Step 4: Clear lockout state and issue a fresh token
        self.lockout.clear(email).await;
        let token = self.jwt_encoder.issue(&user).map_err(LoginError::Internal)?;

        info!(user_id = user.id, role = %user.role, "Login successful");

        Ok(LoginResult {
            token,
            user: sanitize(user),
        })
    }
}

/// Strips the password hash from a user record.
fn sanitize(user: User) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        email: user.email,
        role: user.role,
    }
}

/// Rounds a duration up to whole minutes.
fn ceil_minutes(remaining: chrono::Duration) -> i64 {
    (remaining.num_milliseconds() + 59_999) / 60_000
}
