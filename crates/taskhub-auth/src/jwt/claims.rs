//! JWT claims structure embedded in identity tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use taskhub_entity::user::UserRole;

/// Claims payload of an identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: i64,
    /// User email at the time of issuance.
    pub email: String,
    /// User role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Authenticated identity extracted from a verified token.
///
/// Only ever constructed from validated claims — never from
/// unauthenticated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The user ID.
    pub id: i64,
    /// The user role.
    pub role: UserRole,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> i64 {
        self.sub
    }

    /// Returns the principal carried by these claims.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub,
            role: self.role,
        }
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
