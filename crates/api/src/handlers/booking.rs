//! Handlers for the `/bookings` resource and the admin booking endpoints.
//!
//! Covers the full booking lifecycle: quoting a stay, submitting a booking
//! (recompute quote, authorize payment, persist), listing, and the
//! admin-driven status transitions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use mahjooz_core::booking::{
    validate_status, validate_transition, MAX_GUEST_CONTACT_BYTES, STATUS_CANCELLED,
    STATUS_CONFIRMED,
};
use mahjooz_core::error::CoreError;
use mahjooz_core::notification::{KIND_SUCCESS, KIND_WARNING};
use mahjooz_core::pricing::{self, Quote};
use mahjooz_core::roles::ROLE_ADMIN;
use mahjooz_core::types::DbId;
use mahjooz_db::models::booking::{Booking, CreateBooking};
use mahjooz_db::models::hotel::Hotel;
use mahjooz_db::models::notification::CreateNotification;
use mahjooz_db::models::room::Room;
use mahjooz_db::models::suite::Suite;
use mahjooz_db::repositories::{BookingRepo, HotelRepo, NotificationRepo, RoomRepo, SuiteRepo};
use mahjooz_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /bookings/quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub room_id: DbId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

/// Request body for `POST /bookings`.
///
/// `guest_contact` is stored opaquely on the booking and returned exactly
/// as sent; prices are never accepted from the client.
#[derive(Debug, Deserialize)]
pub struct SubmitBookingRequest {
    pub room_id: DbId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    #[serde(default = "empty_contact")]
    pub guest_contact: serde_json::Value,
}

fn empty_contact() -> serde_json::Value {
    serde_json::json!({})
}

/// Query parameters for `GET /admin/bookings`.
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    /// Filter to a single status (`pending`, `confirmed`, `cancelled`).
    pub status: Option<String>,
}

/// Request body for `PATCH /admin/bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Public / customer handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings/quote
///
/// Price a prospective stay without persisting anything. Public, so guests
/// can see the full breakdown before authenticating.
pub async fn quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteRequest>,
) -> AppResult<Json<Quote>> {
    let (room, _suite, hotel) = load_room_context(&state.pool, input.room_id).await?;

    if !room.available {
        return Err(AppError::Core(CoreError::Conflict(
            "Room is not available for booking".into(),
        )));
    }

    let booked_on = Utc::now().date_naive();
    let quote = pricing::quote(
        room.price_per_night_cents,
        room.max_guests,
        &hotel.currency,
        input.check_in,
        input.check_out,
        input.guests,
        booked_on,
    )?;

    Ok(Json(quote))
}

/// POST /api/v1/bookings
///
/// Submit a booking: the quote is recomputed server-side, the total is
/// authorized with the payment gateway, and only then is the booking
/// persisted in `pending` status.
pub async fn create(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<SubmitBookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let (room, suite, hotel) = load_room_context(&state.pool, input.room_id).await?;

    if !room.available {
        return Err(AppError::Core(CoreError::Conflict(
            "Room is not available for booking".into(),
        )));
    }

    let booked_on = Utc::now().date_naive();
    let quote = pricing::quote(
        room.price_per_night_cents,
        room.max_guests,
        &hotel.currency,
        input.check_in,
        input.check_out,
        input.guests,
        booked_on,
    )?;

    let contact_bytes = serde_json::to_vec(&input.guest_contact)
        .map_err(|e| AppError::InternalError(format!("Serialization error: {e}")))?;
    if contact_bytes.len() > MAX_GUEST_CONTACT_BYTES {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Guest contact payload exceeds {MAX_GUEST_CONTACT_BYTES} bytes"
        ))));
    }

    // Nothing is persisted unless the gateway approves the total.
    let authorization = state
        .payments
        .authorize(quote.total_cents, &quote.currency)
        .await?;

    let booking = BookingRepo::create(
        &state.pool,
        &CreateBooking {
            user_id: auth.user_id,
            hotel_id: hotel.id,
            suite_id: suite.id,
            room_id: room.id,
            check_in: input.check_in,
            check_out: input.check_out,
            guests: input.guests,
            subtotal_cents: quote.subtotal_cents,
            tax_cents: quote.tax_cents,
            discount_cents: quote.discount_cents,
            total_cents: quote.total_cents,
            currency: quote.currency.clone(),
            guest_contact: input.guest_contact,
            payment_ref: Some(authorization.reference),
        },
    )
    .await?;

    tracing::info!(
        booking_id = booking.id,
        user_id = auth.user_id,
        room_id = room.id,
        total_cents = booking.total_cents,
        "Booking submitted"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/v1/bookings
///
/// List the authenticated user's bookings, newest first.
pub async fn list_mine(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
///
/// Owners and admins only. Anyone else gets 404 rather than 403 so booking
/// ids are not probeable.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if booking.user_id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }));
    }

    Ok(Json(booking))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/bookings
///
/// List all bookings, optionally filtered by status.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    if let Some(status) = &params.status {
        validate_status(status)?;
    }

    let bookings = BookingRepo::list(&state.pool, params.status.as_deref()).await?;
    Ok(Json(bookings))
}

/// PATCH /api/v1/admin/bookings/{id}/status
///
/// Drive the booking lifecycle: `pending -> confirmed`, `pending ->
/// cancelled`, `confirmed -> cancelled`. Re-applying the current status
/// succeeds and bumps `updated_at`. Cancellation issues a simulated refund.
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<Booking>> {
    validate_status(&input.status)?;

    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    validate_transition(&booking.status, &input.status)?;

    let updated = BookingRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if updated.status != booking.status {
        if updated.status == STATUS_CANCELLED {
            tracing::info!(
                booking_id = updated.id,
                amount_cents = updated.total_cents,
                "Simulated refund issued for cancelled booking"
            );
        }
        notify_status_change(&state.pool, &updated).await;
    }

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a room plus its suite and hotel. Every link 404s as a missing
/// room: an FK cascade can only remove them together, so a broken chain
/// means the room was deleted between queries.
async fn load_room_context(
    pool: &DbPool,
    room_id: DbId,
) -> Result<(Room, Suite, Hotel), AppError> {
    let room = RoomRepo::find_by_id(pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    let suite = SuiteRepo::find_by_id(pool, room.suite_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    let hotel = HotelRepo::find_by_id(pool, suite.hotel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    Ok((room, suite, hotel))
}

/// Create the in-app notification for a status change. Failures are logged
/// and do not affect the transition response.
async fn notify_status_change(pool: &DbPool, booking: &Booking) {
    let (kind, title, message) = match booking.status.as_str() {
        STATUS_CONFIRMED => (
            KIND_SUCCESS,
            "Booking confirmed",
            format!(
                "Your booking #{} has been confirmed. We look forward to your stay!",
                booking.id
            ),
        ),
        STATUS_CANCELLED => (
            KIND_WARNING,
            "Booking cancelled",
            format!(
                "Your booking #{} has been cancelled. Any captured payment will be refunded.",
                booking.id
            ),
        ),
        _ => return,
    };

    let input = CreateNotification {
        user_id: Some(booking.user_id),
        title: title.to_string(),
        message,
        kind: kind.to_string(),
    };

    if let Err(e) = NotificationRepo::create(pool, &input).await {
        tracing::warn!(error = %e, booking_id = booking.id, "Failed to create status notification");
    }
}
