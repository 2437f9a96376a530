//! Notification kind constants and validation.
//!
//! A notification row targets one user or, with no target, every user
//! (a broadcast). Kinds form a closed vocabulary shared with the frontend.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Kind constants
// ---------------------------------------------------------------------------

pub const KIND_INFO: &str = "info";
pub const KIND_SUCCESS: &str = "success";
pub const KIND_WARNING: &str = "warning";
pub const KIND_ERROR: &str = "error";

/// All valid notification kinds.
pub const VALID_KINDS: &[&str] = &[KIND_INFO, KIND_SUCCESS, KIND_WARNING, KIND_ERROR];

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum length for a notification title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;
/// Maximum length for a notification message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 2_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a kind string is one of the known kinds.
pub fn validate_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid notification kind '{}'. Must be one of: {:?}",
            kind, VALID_KINDS
        )))
    }
}

/// Validate the title: non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Notification title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notification title exceeds maximum length of {} characters (got {})",
            MAX_TITLE_LENGTH,
            title.len()
        )));
    }
    Ok(())
}

/// Validate the message body: non-empty and within the length limit.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "Notification message must not be empty".to_string(),
        ));
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notification message exceeds maximum length of {} characters (got {})",
            MAX_MESSAGE_LENGTH,
            message.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_valid() {
        for k in VALID_KINDS {
            assert!(validate_kind(k).is_ok(), "Kind '{k}' should be valid");
        }
    }

    #[test]
    fn unknown_kind_is_invalid() {
        assert!(validate_kind("urgent").is_err());
        assert!(validate_kind("").is_err());
    }

    #[test]
    fn empty_title_is_invalid() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn title_length_limit_is_enforced() {
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn message_length_limit_is_enforced() {
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_LENGTH)).is_ok());
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }
}
