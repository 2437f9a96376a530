//! Inventory validation rules for hotels, suites, and rooms.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum hotel rating.
pub const MIN_RATING: f64 = 0.0;
/// Maximum hotel rating.
pub const MAX_RATING: f64 = 5.0;
/// Maximum length for hotel, suite, and room names (characters).
pub const MAX_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a display name: non-empty and within the length limit.
///
/// `label` names the field in error messages ("Hotel name", "Room name", ...).
pub fn validate_name(label: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{label} exceeds maximum length of {} characters (got {})",
            MAX_NAME_LENGTH,
            name.len()
        )));
    }
    Ok(())
}

/// Validate a hotel rating is within the 0-5 scale.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING} (got {rating})"
        )))
    }
}

/// Validate a nightly price in cents is positive.
pub fn validate_price_cents(price_cents: i64) -> Result<(), CoreError> {
    if price_cents > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Nightly price must be positive (got {price_cents})"
        )))
    }
}

/// Validate a room's guest capacity is at least one.
pub fn validate_max_guests(max_guests: i32) -> Result<(), CoreError> {
    if max_guests >= 1 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Room capacity must be at least 1 guest (got {max_guests})"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
