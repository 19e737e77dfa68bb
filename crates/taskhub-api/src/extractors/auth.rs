//! `AuthUser` extractor — pulls the JWT from the Authorization header and
//! validates it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskhub_auth::jwt::{Claims, Principal};
use taskhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated claims available in handlers.
///
/// Any missing, malformed, expired, or forged token rejects the request
/// with a 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the principal carried by the verified token.
    pub fn principal(&self) -> Principal {
        self.0.principal()
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Unauthorized")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Unauthorized")))?;

        let claims = state
            .jwt_decoder
            .decode(token)
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Invalid token")))?;

        Ok(AuthUser(claims))
    }
}
