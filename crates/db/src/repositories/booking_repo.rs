//! Repository for the `bookings` table.

use sqlx::PgPool;

use mahjooz_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, hotel_id, suite_id, room_id, check_in, check_out, guests, \
                        subtotal_cents, tax_cents, discount_cents, total_cents, currency, \
                        guest_contact, payment_ref, status, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking in `pending` status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (user_id, hotel_id, suite_id, room_id, check_in, check_out,
                                   guests, subtotal_cents, tax_cents, discount_cents, total_cents,
                                   currency, guest_contact, payment_ref)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.user_id)
            .bind(input.hotel_id)
            .bind(input.suite_id)
            .bind(input.room_id)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(input.guests)
            .bind(input.subtotal_cents)
            .bind(input.tax_cents)
            .bind(input.discount_cents)
            .bind(input.total_cents)
            .bind(&input.currency)
            .bind(&input.guest_contact)
            .bind(&input.payment_ref)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's bookings, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all bookings, newest first, optionally filtered by status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Booking>, sqlx::Error> {
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM bookings WHERE status = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Booking>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC");
                sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
            }
        }
    }

    /// Set a booking's status, returning the updated row.
    ///
    /// Transition legality is checked by the caller; this write is
    /// unconditional so that re-applying the current status still
    /// bumps `updated_at`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
