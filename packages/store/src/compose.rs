//! Length policy for the post and comment inputs.
//!
//! The input accepts up to `limit + soft_overflow` characters so the user can see
//! the counter go negative, but submission is only allowed while the trimmed
//! message is non-empty and the raw message fits within `limit`. Lengths are
//! counted in Unicode scalar values.

use thiserror::Error;

/// The text boxes a message can be typed into. Each may let the counter run
/// past the limit by a different amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    NewPost,
    PostEdit,
    Comment,
}

/// Why a message was rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message cannot be empty")]
    Empty,
    #[error("Message is {len} characters; the limit is {limit}")]
    TooLong { len: usize, limit: usize },
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeLimit {
    limit: usize,
    soft_overflow: usize,
}

impl Default for ComposeLimit {
    fn default() -> Self {
        Self::new(280, 50)
    }
}

impl ComposeLimit {
    pub fn new(limit: usize, soft_overflow: usize) -> Self {
        Self {
            limit,
            soft_overflow,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Maximum number of characters the input element accepts.
    pub fn hard_max(&self) -> usize {
        self.limit + self.soft_overflow
    }

    /// Characters left before the limit; negative once over it.
    pub fn remaining(&self, message: &str) -> i64 {
        self.limit as i64 - message.chars().count() as i64
    }

    pub fn is_over_limit(&self, message: &str) -> bool {
        self.remaining(message) < 0
    }

    /// Whether the submit control should be enabled for `message`.
    pub fn can_submit(&self, message: &str) -> bool {
        self.validate(message).is_ok()
    }

    /// Check `message` and return its trimmed form.
    pub fn validate(&self, message: &str) -> Result<String, ValidationError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let len = message.chars().count();
        if len > self.limit {
            return Err(ValidationError::TooLong {
                len,
                limit: self.limit,
            });
        }
        Ok(trimmed.to_string())
    }

    /// Cut raw input down to what the input element would accept.
    pub fn clamp(&self, input: &str) -> String {
        input.chars().take(self.hard_max()).collect()
    }
}

/// Presence check for free-form form fields (name, email, password).
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_at_limit() {
        let limit = ComposeLimit::default();
        let at_limit = "a".repeat(280);
        let over = "a".repeat(281);

        assert!(limit.can_submit(&at_limit));
        assert_eq!(limit.remaining(&at_limit), 0);

        assert!(!limit.can_submit(&over));
        assert!(limit.is_over_limit(&over));
        assert_eq!(limit.remaining(&over), -1);
        assert_eq!(
            limit.validate(&over),
            Err(ValidationError::TooLong { len: 281, limit: 280 })
        );
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        let limit = ComposeLimit::default();
        assert_eq!(limit.validate("   \n\t "), Err(ValidationError::Empty));
        assert_eq!(limit.validate(""), Err(ValidationError::Empty));
        assert!(!limit.can_submit("  "));
    }

    #[test]
    fn test_validate_returns_trimmed() {
        let limit = ComposeLimit::default();
        assert_eq!(limit.validate("  hello  ").unwrap(), "hello");
    }

    #[test]
    fn test_raw_length_counts_surrounding_whitespace() {
        let limit = ComposeLimit::new(5, 2);
        assert!(limit.can_submit("hello"));
        assert!(!limit.can_submit(" hello"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let limit = ComposeLimit::new(3, 0);
        assert!(limit.can_submit("héé"));
        assert_eq!(limit.remaining("🐦"), 2);
    }

    #[test]
    fn test_clamp_to_hard_max() {
        let limit = ComposeLimit::default();
        let input = "x".repeat(400);
        assert_eq!(limit.clamp(&input).chars().count(), 330);
        assert_eq!(limit.clamp("short"), "short");
    }

    #[test]
    fn test_require_presence() {
        assert!(require("Name", "Ann").is_ok());
        assert_eq!(
            require("Email", "  "),
            Err(ValidationError::MissingField("Email"))
        );
        assert_eq!(
            ValidationError::MissingField("Password").to_string(),
            "Password is required"
        );
    }
}
