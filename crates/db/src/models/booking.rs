//! Booking entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use mahjooz_core::types::{DbId, Timestamp};

/// A booking row from the `bookings` table.
///
/// The monetary fields are the quote breakdown frozen at submission time.
/// `guest_contact` is stored opaquely and must round-trip exactly as the
/// client sent it, including absent optional fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub hotel_id: DbId,
    pub suite_id: DbId,
    pub room_id: DbId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub currency: String,
    pub guest_contact: serde_json::Value,
    pub payment_ref: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new booking. Built server-side from a validated
/// request plus the recomputed quote; never deserialized from clients.
#[derive(Debug)]
pub struct CreateBooking {
    pub user_id: DbId,
    pub hotel_id: DbId,
    pub suite_id: DbId,
    pub room_id: DbId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub currency: String,
    pub guest_contact: serde_json::Value,
    pub payment_ref: Option<String>,
}
