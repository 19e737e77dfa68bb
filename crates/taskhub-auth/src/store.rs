//! User store trait consumed by the login flow.

use async_trait::async_trait;

use taskhub_core::result::AppResult;
use taskhub_entity::user::User;

/// Read access to user records, keyed by email.
///
/// Implemented by the database crate's `UserRepository` and by in-memory
/// stubs in tests. The login flow does not prescribe the storage engine.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email (case-insensitive).
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
}
