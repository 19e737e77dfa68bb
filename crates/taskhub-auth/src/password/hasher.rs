//! Password hashing and verification with per-call random salts.
//!
//! Stored hashes have the form `salt_hex:derived_key_hex`: a 16-byte
//! OS-random salt and a 64-byte Argon2id derivation of the password,
//! both hex-encoded.

use argon2::Argon2;
use rand::TryRngCore;
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;

use taskhub_core::error::AppError;

/// Salt length in raw bytes (hex-encoded in the stored hash).
const SALT_LEN: usize = 16;

/// Derived key length in bytes.
const KEY_LEN: usize = 64;

/// Delimiter between the salt and derived key segments.
const DELIMITER: char = ':';

/// Handles password hashing and verification.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Hashing the same password twice yields different strings; only
    /// [`verify_password`](Self::verify_password) can check a candidate
    /// against a stored hash. Fails only if the OS entropy source or the
    /// key derivation itself fails.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| AppError::internal(format!("Entropy source failure: {e}")))?;

        let salt_hex = hex::encode(salt);
        let key = derive_key(password, salt_hex.as_bytes())?;

        Ok(format!("{}{}{}", salt_hex, DELIMITER, hex::encode(key)))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `false` on mismatch and on any malformed stored hash; a
    /// verification failure is never an error. The derived key comparison
    /// is constant-time.
    pub fn verify_password(&self, password: &str, stored: &str) -> bool {
        let Some((salt_hex, key_hex)) = stored.split_once(DELIMITER) else {
            return false;
        };

        let Ok(expected) = hex::decode(key_hex) else {
            return false;
        };
        if expected.len() != KEY_LEN {
            return false;
        }

        let Ok(derived) = derive_key(password, salt_hex.as_bytes()) else {
            return false;
        };

        derived.ct_eq(expected.as_slice()).into()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a fixed-length key from password and salt with Argon2id.
fn derive_key(password: &str, salt: &[u8]) -> Result<[u8; KEY_LEN], AppError> {
    let mut out = [0u8; KEY_LEN];
    Argon2::default()
        .hash_password_into(password.as_bytes(), salt, &mut out)
        .map_err(|e| AppError::internal(format!("Key derivation failed: {e}")))?;
    Ok(out)
}
