//! Domain error type shared across the workspace.

use chrono::NaiveDate;

use crate::types::DbId;

/// Errors produced by domain logic.
///
/// The API layer maps each variant onto an HTTP status code and a stable
/// error code string.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Guest count must be between 1 and {max_guests} (got {guests})")]
    GuestCountExceeded { guests: i32, max_guests: i32 },

    #[error("Cannot transition booking from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
