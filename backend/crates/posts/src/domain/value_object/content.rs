//! Post Content Value Object

use std::fmt;

/// Upper bound on post length, counted in characters
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Validated post body. Stored verbatim; validation only guards the
/// edges (blank or absurdly long input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(content: impl Into<String>) -> Result<Self, String> {
        let content = content.into();

        if content.trim().is_empty() {
            return Err("Content is required".to_string());
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(format!(
                "Content must be at most {MAX_CONTENT_LENGTH} characters"
            ));
        }

        Ok(Self(content))
    }

    /// Reconstruct from a trusted storage row without re-validation
    pub(crate) fn from_storage(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content_kept_verbatim() {
        let content = PostContent::new("  hello world  ").unwrap();
        assert_eq!(content.as_str(), "  hello world  ");
    }

    #[test]
    fn test_blank_content_rejected() {
        assert!(PostContent::new("").is_err());
        assert!(PostContent::new("   \t\n").is_err());
    }

    #[test]
    fn test_length_counted_in_chars() {
        let at_limit = "あ".repeat(MAX_CONTENT_LENGTH);
        assert!(PostContent::new(at_limit).is_ok());

        let over = "あ".repeat(MAX_CONTENT_LENGTH + 1);
        assert!(PostContent::new(over).is_err());
    }
}
