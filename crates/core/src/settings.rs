//! App settings validation rules.
//!
//! The settings table is a single row the frontend brands itself from;
//! these checks guard the admin update path.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for the application name (characters).
pub const MAX_APP_NAME_LENGTH: usize = 100;
/// Maximum length for the application description (characters).
pub const MAX_APP_DESCRIPTION_LENGTH: usize = 1_000;
/// Maximum length for the support phone number (characters).
pub const MAX_SUPPORT_PHONE_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the application name: non-empty and within the length limit.
pub fn validate_app_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "App name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_APP_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "App name exceeds maximum length of {MAX_APP_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the application description length.
pub fn validate_app_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_APP_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "App description exceeds maximum length of {MAX_APP_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the support phone number length.
pub fn validate_support_phone(phone: &str) -> Result<(), CoreError> {
    if phone.chars().count() > MAX_SUPPORT_PHONE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Support phone exceeds maximum length of {MAX_SUPPORT_PHONE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a currency code: exactly three ASCII uppercase letters.
pub fn validate_currency_code(code: &str) -> Result<(), CoreError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Currency must be a three-letter uppercase code (got '{code}')"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_must_be_nonempty() {
        assert!(validate_app_name("محجوز").is_ok());
        assert!(validate_app_name("").is_err());
        assert!(validate_app_name("   ").is_err());
    }

    #[test]
    fn app_name_length_counts_characters_not_bytes() {
        // Arabic letters are multi-byte; the limit is on characters.
        let name = "م".repeat(MAX_APP_NAME_LENGTH);
        assert!(validate_app_name(&name).is_ok());
        let too_long = "م".repeat(MAX_APP_NAME_LENGTH + 1);
        assert!(validate_app_name(&too_long).is_err());
    }

    #[test]
    fn currency_codes_are_three_uppercase_letters() {
        assert!(validate_currency_code("EGP").is_ok());
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("egp").is_err());
        assert!(validate_currency_code("EG").is_err());
        assert!(validate_currency_code("EGPP").is_err());
        assert!(validate_currency_code("E1P").is_err());
    }

    #[test]
    fn description_and_phone_limits_are_enforced() {
        assert!(validate_app_description(&"a".repeat(MAX_APP_DESCRIPTION_LENGTH)).is_ok());
        assert!(validate_app_description(&"a".repeat(MAX_APP_DESCRIPTION_LENGTH + 1)).is_err());
        assert!(validate_support_phone(&"1".repeat(MAX_SUPPORT_PHONE_LENGTH)).is_ok());
        assert!(validate_support_phone(&"1".repeat(MAX_SUPPORT_PHONE_LENGTH + 1)).is_err());
    }
}
