//! Salted credential hashing and verification.

pub mod hasher;

pub use hasher::PasswordHasher;
