//! Route definitions for the public `/settings` resource.
//!
//! Admin writes live under `/admin/settings`.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /  -> get_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get_settings))
}
