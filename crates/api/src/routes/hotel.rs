//! Route definitions for the public `/hotels` resource.
//!
//! Read-only: catalog writes live under `/admin`.

use axum::routing::get;
use axum::Router;

use crate::handlers::hotel;
use crate::state::AppState;

/// Routes mounted at `/hotels`.
///
/// ```text
/// GET /      -> list (hydrated with suites and rooms)
/// GET /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hotel::list))
        .route("/{id}", get(hotel::get_by_id))
}
