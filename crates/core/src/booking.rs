//! Booking status constants, transition rules, and request validation.
//!
//! Defines the booking lifecycle state machine and the invariants a booking
//! request must satisfy, shared by the API and repository layers.

use chrono::NaiveDate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly submitted booking (payment authorized,
/// awaiting administrator review).
pub const STATUS_PENDING: &str = "pending";
/// An administrator has confirmed the reservation.
pub const STATUS_CONFIRMED: &str = "confirmed";
/// The reservation was cancelled. Terminal.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid booking statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_CONFIRMED, STATUS_CANCELLED];

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum serialized size of the guest contact payload (bytes).
pub const MAX_GUEST_CONTACT_BYTES: usize = 16 * 1024;

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
///
/// Transition rules:
/// - `pending`   -> `confirmed`, `cancelled`
/// - `confirmed` -> `cancelled`
/// - `cancelled` -> (terminal)
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_CONFIRMED, STATUS_CANCELLED],
        STATUS_CONFIRMED => &[STATUS_CANCELLED],
        STATUS_CANCELLED => &[],
        _ => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
///
/// Re-requesting the status a booking already holds is accepted, so a
/// repeated administrator action never errors.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    if current == next {
        return Ok(());
    }
    if valid_transitions(current).contains(&next) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: current.to_string(),
            to: next.to_string(),
        })
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid booking status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

// ---------------------------------------------------------------------------
// Request invariants
// ---------------------------------------------------------------------------

/// Validate that check-out is strictly later than check-in.
pub fn validate_date_range(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), CoreError> {
    if check_out > check_in {
        Ok(())
    } else {
        Err(CoreError::InvalidDateRange {
            check_in,
            check_out,
        })
    }
}

/// Validate the guest count against a room's capacity.
pub fn validate_guest_count(guests: i32, max_guests: i32) -> Result<(), CoreError> {
    if guests >= 1 && guests <= max_guests {
        Ok(())
    } else {
        Err(CoreError::GuestCountExceeded { guests, max_guests })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("refunded").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn pending_can_transition_to_confirmed_or_cancelled() {
        assert!(validate_transition(STATUS_PENDING, STATUS_CONFIRMED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_CANCELLED).is_ok());
    }

    #[test]
    fn confirmed_can_only_transition_to_cancelled() {
        assert!(validate_transition(STATUS_CONFIRMED, STATUS_CANCELLED).is_ok());
        assert!(matches!(
            validate_transition(STATUS_CONFIRMED, STATUS_PENDING),
            Err(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(matches!(
            validate_transition(STATUS_CANCELLED, STATUS_CONFIRMED),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            validate_transition(STATUS_CANCELLED, STATUS_PENDING),
            Err(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn same_status_transition_is_accepted() {
        assert!(validate_transition(STATUS_PENDING, STATUS_PENDING).is_ok());
        assert!(validate_transition(STATUS_CONFIRMED, STATUS_CONFIRMED).is_ok());
        assert!(validate_transition(STATUS_CANCELLED, STATUS_CANCELLED).is_ok());
    }

    #[test]
    fn checkout_after_checkin_is_valid() {
        assert!(validate_date_range(date(2025, 1, 1), date(2025, 1, 2)).is_ok());
        assert!(validate_date_range(date(2025, 1, 1), date(2025, 3, 15)).is_ok());
    }

    #[test]
    fn equal_or_reversed_dates_are_invalid() {
        assert!(matches!(
            validate_date_range(date(2025, 1, 1), date(2025, 1, 1)),
            Err(CoreError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            validate_date_range(date(2025, 1, 2), date(2025, 1, 1)),
            Err(CoreError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn guest_count_within_capacity_is_valid() {
        assert!(validate_guest_count(1, 2).is_ok());
        assert!(validate_guest_count(2, 2).is_ok());
    }

    #[test]
    fn guest_count_outside_capacity_is_invalid() {
        assert!(matches!(
            validate_guest_count(3, 2),
            Err(CoreError::GuestCountExceeded {
                guests: 3,
                max_guests: 2
            })
        ));
        assert!(matches!(
            validate_guest_count(0, 2),
            Err(CoreError::GuestCountExceeded { .. })
        ));
    }
}
