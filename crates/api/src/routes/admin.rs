//! Route definitions for the `/admin` resource.
//!
//! All routes require the `admin` role (enforced by handler extractors).

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::{admin, booking, hotel, notification, settings};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /stats                  -> stats
///
/// GET    /users                  -> list_users
/// GET    /users/{id}             -> get_user
/// DELETE /users/{id}             -> deactivate_user
///
/// POST   /hotels                 -> create hotel
/// PUT    /hotels/{id}            -> update hotel
/// DELETE /hotels/{id}            -> delete hotel
/// POST   /hotels/{id}/suites     -> create suite
/// DELETE /suites/{id}            -> delete suite
/// POST   /suites/{id}/rooms      -> create room
/// PUT    /rooms/{id}             -> update room
/// DELETE /rooms/{id}             -> delete room
///
/// GET    /bookings               -> list_all (?status=)
/// PATCH  /bookings/{id}/status   -> update_status
///
/// POST   /notifications          -> send_notification
///
/// PUT    /settings               -> update_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/stats", get(admin::stats))
        // User management
        .route("/users", get(admin::list_users))
        .route(
            "/users/{id}",
            get(admin::get_user).delete(admin::deactivate_user),
        )
        // Catalog management
        .route("/hotels", post(hotel::create))
        .route("/hotels/{id}", put(hotel::update).delete(hotel::delete))
        .route("/hotels/{id}/suites", post(hotel::create_suite))
        .route("/suites/{id}", delete(hotel::delete_suite))
        .route("/suites/{id}/rooms", post(hotel::create_room))
        .route(
            "/rooms/{id}",
            put(hotel::update_room).delete(hotel::delete_room),
        )
        // Booking lifecycle
        .route("/bookings", get(booking::list_all))
        .route("/bookings/{id}/status", patch(booking::update_status))
        // Notifications
        .route("/notifications", post(notification::send_notification))
        // Application settings
        .route("/settings", put(settings::update_settings))
}
