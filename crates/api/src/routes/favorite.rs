//! Route definitions for the `/favorites` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET  /                   -> list
/// GET  /{hotel_id}         -> check
/// POST /{hotel_id}/toggle  -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorite::list))
        .route("/{hotel_id}", get(favorite::check))
        .route("/{hotel_id}/toggle", post(favorite::toggle))
}
