//! Route definitions for the `/bookings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST /quote  -> quote (public)
/// POST /       -> create (requires auth)
/// GET  /       -> list_mine (requires auth)
/// GET  /{id}   -> get_by_id (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(booking::quote))
        .route("/", post(booking::create).get(booking::list_mine))
        .route("/{id}", get(booking::get_by_id))
}
