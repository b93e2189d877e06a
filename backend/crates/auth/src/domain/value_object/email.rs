//! Email Value Object
//!
//! Represents a validated email address. Basic structural validation
//! only; stored and compared lowercase.

use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let email = raw.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(AuthError::Validation("Invalid email format".to_string()));
        }

        Ok(Self(email))
    }

    /// Reconstruct from storage without re-validation
    pub(crate) fn from_storage(email: String) -> Self {
        Self(email)
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        true
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("Alice@Example.COM").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Email::new("").is_err());
        assert!(Email::new("  ").is_err());
    }

    #[test]
    fn test_structural_checks() {
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("two@@example.com").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@nodot").is_err());
        assert!(Email::new("user@.leading.dot").is_err());
        assert!(Email::new("user@trailing.dot.").is_err());
        assert!(Email::new("user@ex ample.com").is_err());
    }
}
