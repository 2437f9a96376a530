pub mod admin;
pub mod auth;
pub mod booking;
pub mod favorite;
pub mod health;
pub mod hotel;
pub mod notification;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/guest                      guest session (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         current user (requires auth)
///
/// /hotels                          list hotels with suites and rooms
/// /hotels/{id}                     get one hotel
///
/// /settings                        application settings (public read)
///
/// /bookings/quote                  price a stay (public, POST)
/// /bookings                        submit, list own (auth required)
/// /bookings/{id}                   get one (owner or admin)
///
/// /favorites                       list favorite hotels (auth required)
/// /favorites/{hotel_id}            check favorite state (GET)
/// /favorites/{hotel_id}/toggle     toggle favorite (POST)
///
/// /notifications                   list (?unread_only, limit, offset)
/// /notifications/unread-count      unread count (GET)
/// /notifications/read-all          mark all read (POST)
/// /notifications/{id}/read         mark read (POST)
///
/// /admin/stats                     dashboard counts (admin only)
/// /admin/users                     list users
/// /admin/users/{id}                get, deactivate
/// /admin/hotels                    create hotel
/// /admin/hotels/{id}               update, delete hotel
/// /admin/hotels/{id}/suites        create suite
/// /admin/suites/{id}               delete suite
/// /admin/suites/{id}/rooms         create room
/// /admin/rooms/{id}                update, delete room
/// /admin/bookings                  list all (?status=)
/// /admin/bookings/{id}/status      transition status (PATCH)
/// /admin/notifications             send notification (POST)
/// /admin/settings                  update settings (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, guest, refresh, logout).
        .nest("/auth", auth::router())
        // Public hotel catalog.
        .nest("/hotels", hotel::router())
        // Application settings (public read).
        .nest("/settings", settings::router())
        // Booking quotes, submission, and per-user listing.
        .nest("/bookings", booking::router())
        // Per-user favorite hotels.
        .nest("/favorites", favorite::router())
        // In-app notifications.
        .nest("/notifications", notification::router())
        // Admin surface (stats, users, catalog, bookings, settings).
        .nest("/admin", admin::router())
}
