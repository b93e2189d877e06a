//! Username Value Object
//!
//! Validated user name. Uniqueness is enforced on the canonical
//! (lowercase) form so "Alice" and "alice" cannot coexist, while the
//! original casing is preserved for display.

use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length
pub const USERNAME_MAX_LENGTH: usize = 32;

/// Username value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username {
    original: String,
    canonical: String,
}

impl Username {
    /// Create a new username with validation
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let original = raw.into().trim().to_string();

        if original.is_empty() {
            return Err(AuthError::Validation("Username is required".to_string()));
        }

        let char_count = original.chars().count();
        if char_count < USERNAME_MIN_LENGTH {
            return Err(AuthError::Validation(format!(
                "Username must be at least {} characters",
                USERNAME_MIN_LENGTH
            )));
        }
        if char_count > USERNAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        if !original
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AuthError::Validation(
                "Username may only contain letters, digits and underscores".to_string(),
            ));
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Reconstruct from storage without re-validation
    pub(crate) fn from_storage(original: String, canonical: String) -> Self {
        Self {
            original,
            canonical,
        }
    }

    /// The username as entered (for display)
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The lowercase form (for uniqueness and lookup)
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let name = Username::new("Alice_99").unwrap();
        assert_eq!(name.original(), "Alice_99");
        assert_eq!(name.canonical(), "alice_99");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let name = Username::new("  bob  ").unwrap();
        assert_eq!(name.original(), "bob");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Username::new("").is_err());
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn test_length_bounds() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("abc").is_ok());
        assert!(Username::new("a".repeat(32)).is_ok());
        assert!(Username::new("a".repeat(33)).is_err());
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(Username::new("has space").is_err());
        assert!(Username::new("semi;colon").is_err());
        assert!(Username::new("email@like").is_err());
    }
}
