//! Identity token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use taskhub_core::config::auth::AuthConfig;

use super::claims::Claims;

/// Validates identity tokens.
///
/// There is no revocation store: a compromised token stays valid until its
/// natural expiry. This is an accepted limitation of the single-token
/// design.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Returns `None` for every failure — malformed, bad signature, or
    /// expired. Callers cannot distinguish the cases; the reason is logged
    /// at debug level instead.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(reason = %e, "Identity token rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use taskhub_core::config::auth::AuthConfig;
    use taskhub_entity::user::{User, UserRole};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    fn test_user() -> User {
        User {
            id: 7,
            email: "a@x.com".to_string(),
            password_hash: String::new(),
            role: UserRole::Contributor,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_then_decode_roundtrip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let token = encoder.issue(&test_user()).unwrap();
        let claims = decoder.decode(&token).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, UserRole::Contributor);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 7,
            email: "a@x.com".to_string(),
            role: UserRole::Viewer,
            iat: now - 3600,
            exp: now - 120,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(decoder.decode(&token).is_none());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "a different secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let token = encoder.issue(&test_user()).unwrap();
        assert!(decoder.decode(&token).is_none());
    }

    #[test]
    fn test_tampered_or_garbage_is_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let mut token = encoder.issue(&test_user()).unwrap();
        token.pop();
        assert!(decoder.decode(&token).is_none());
        assert!(decoder.decode("not-a-token").is_none());
        assert!(decoder.decode("").is_none());
    }
}
