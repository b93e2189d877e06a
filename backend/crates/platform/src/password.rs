//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Randomized salts (two hashes of the same secret differ)
//! - Zeroization of cleartext material
//! - Constant-time verification via the argon2 crate
//!
//! The cleartext never leaves this module except as a PHC hash string,
//! and its `Debug` output is redacted.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty or whitespace only
    #[error("Password cannot be empty")]
    EmptyOrWhitespace,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone` to prevent accidental copies; memory is
/// securely erased when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Rules: not empty/whitespace, at most [`MAX_PASSWORD_LENGTH`]
    /// characters, no control characters.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points, not bytes
        let char_count = raw.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if raw.chars().any(|ch| ch.is_control()) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a random salt
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword(hash.to_string()))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (PHC string)
// ============================================================================

/// Argon2id hash in PHC string format, safe to store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap a PHC string loaded from storage, validating its format
    pub fn from_phc(phc: String) -> Result<Self, PasswordHashError> {
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self(phc))
    }

    /// The PHC string for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a cleartext password against this hash
    ///
    /// The comparison inside the argon2 crate is constant-time. A
    /// mismatch is a normal `Ok(false)`; only a malformed stored hash is
    /// an error.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(&self.0).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
