//! Booking price computation.
//!
//! Produces the quote breakdown shown to guests before payment and stored
//! on the booking at submission. All monetary amounts are integer cents so
//! the arithmetic is exact. One formula applies everywhere:
//! `total = subtotal + tax - discount`.

use chrono::NaiveDate;

use crate::booking::{validate_date_range, validate_guest_count};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// Flat tax surcharge applied to every booking subtotal.
pub const TAX_RATE_PERCENT: i64 = 14;
/// Early-booking discount, granted as a separate line item.
pub const EARLY_BOOKING_DISCOUNT_PERCENT: i64 = 5;
/// Minimum days between booking and check-in to qualify for the
/// early-booking discount.
pub const EARLY_BOOKING_MIN_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Quote type
// ---------------------------------------------------------------------------

/// A computed price breakdown for a prospective stay, prior to persistence.
///
/// Amounts are integer cents of `currency`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Quote {
    pub nights: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub currency: String,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Percentage of an amount in cents, rounded half-up.
fn percent_of(amount_cents: i64, percent: i64) -> i64 {
    (amount_cents * percent + 50) / 100
}

/// Compute a price quote for a stay in a room.
///
/// `booked_on` is the date the quote is made; it is passed in rather than
/// read from the clock so the computation stays pure. The early-booking
/// discount applies when check-in is at least [`EARLY_BOOKING_MIN_DAYS`]
/// days after `booked_on`.
///
/// Fails with `InvalidDateRange` unless `check_out > check_in`, and with
/// `GuestCountExceeded` unless `1 <= guests <= max_guests`. No side effects.
pub fn quote(
    price_per_night_cents: i64,
    max_guests: i32,
    currency: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    booked_on: NaiveDate,
) -> Result<Quote, CoreError> {
    validate_date_range(check_in, check_out)?;
    validate_guest_count(guests, max_guests)?;

    // Dates are whole days, so the night count is the day difference
    // (always >= 1 after range validation).
    let nights = (check_out - check_in).num_days();
    let subtotal_cents = nights * price_per_night_cents;
    let tax_cents = percent_of(subtotal_cents, TAX_RATE_PERCENT);
    let discount_cents = if (check_in - booked_on).num_days() >= EARLY_BOOKING_MIN_DAYS {
        percent_of(subtotal_cents, EARLY_BOOKING_DISCOUNT_PERCENT)
    } else {
        0
    };
    let total_cents = subtotal_cents + tax_cents - discount_cents;

    Ok(Quote {
        nights,
        subtotal_cents,
        tax_cents,
        discount_cents,
        total_cents,
        currency: currency.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
