//! HTTP-level integration tests for the hotel catalog.
//!
//! Tests cover public hydrated reads, admin CRUD over hotels, suites, and
//! rooms, cascade deletion, and RBAC enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get, login_user, post_json, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create an admin account and return a valid access token for it.
async fn admin_token(pool: &PgPool) -> String {
    let (_admin, password) = create_test_user(pool, "admin@test.com", 1).await;
    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "admin@test.com", &password).await;
    login_json["access_token"].as_str().unwrap().to_string()
}

/// Create a hotel -> suite -> room chain via the admin API and return
/// their ids.
async fn seed_catalog(pool: &PgPool, token: &str) -> (i64, i64, i64) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Nile View",
        "city": "Cairo",
        "rating": 4.5,
        "price_per_night_cents": 45_000
    });
    let response = post_json_auth(app, "/api/v1/admin/hotels", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let hotel = body_json(response).await;
    let hotel_id = hotel["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Royal Suite" });
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/hotels/{hotel_id}/suites"),
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let suite = body_json(response).await;
    let suite_id = suite["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Room 101",
        "price_per_night_cents": 45_000,
        "max_guests": 3
    });
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/suites/{suite_id}/rooms"),
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let room = body_json(response).await;
    let room_id = room["id"].as_i64().unwrap();

    (hotel_id, suite_id, room_id)
}

// ---------------------------------------------------------------------------
// Public read tests
// ---------------------------------------------------------------------------

/// GET /hotels returns hotels hydrated with their suites and rooms.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_hotels_hydrated(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (hotel_id, suite_id, room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/hotels").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let hotels = json.as_array().expect("response body should be an array");
    assert_eq!(hotels.len(), 1);

    let hotel = &hotels[0];
    assert_eq!(hotel["id"], hotel_id);
    assert_eq!(hotel["name"], "Nile View");
    assert_eq!(hotel["suites"][0]["id"], suite_id);
    assert_eq!(hotel["suites"][0]["rooms"][0]["id"], room_id);
    assert_eq!(hotel["suites"][0]["rooms"][0]["max_guests"], 3);
}

/// GET /hotels/{id} returns one hydrated hotel; unknown ids return 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_hotel_by_id(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (hotel_id, _suite_id, _room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/hotels/{hotel_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], hotel_id);
    assert_eq!(json["suites"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/hotels/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Admin hotel CRUD tests
// ---------------------------------------------------------------------------

/// Creating a hotel without a currency falls back to the EGP default.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_hotel_default_currency(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Alexandria Shore",
        "price_per_night_cents": 30_000
    });
    let response = post_json_auth(app, "/api/v1/admin/hotels", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["currency"], "EGP");
    assert_eq!(json["rating"], 0.0);
}

/// A rating outside 0..=5 is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_hotel_invalid_rating(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Bad Rating",
        "rating": 5.5,
        "price_per_night_cents": 30_000
    });
    let response = post_json_auth(app, "/api/v1/admin/hotels", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A non-positive nightly price is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_hotel_invalid_price(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Free Hotel",
        "price_per_night_cents": 0
    });
    let response = post_json_auth(app, "/api/v1/admin/hotels", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// PUT /admin/hotels/{id} updates only the provided fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_hotel_partial(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (hotel_id, _suite_id, _room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "city": "Luxor" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/hotels/{hotel_id}"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["city"], "Luxor");
    // Untouched fields keep their values.
    assert_eq!(json["name"], "Nile View");
    assert_eq!(json["rating"], 4.5);
}

/// Deleting a hotel cascades to its suites and rooms.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_hotel_cascades(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (hotel_id, _suite_id, room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/hotels/{hotel_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/hotels/{hotel_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The room went with it, so a quote against it is a 404.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "room_id": room_id,
        "check_in": "2026-10-01",
        "check_out": "2026-10-04",
        "guests": 2
    });
    let response = post_json(app, "/api/v1/bookings/quote", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting an unknown hotel returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unknown_hotel(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/admin/hotels/999999", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Admin suite / room tests
// ---------------------------------------------------------------------------

/// Creating a suite under an unknown hotel returns 404, not an FK error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_suite_unknown_hotel(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Orphan Suite" });
    let response = post_json_auth(app, "/api/v1/admin/hotels/999999/suites", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A room can be flipped unavailable through a partial update.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_room_availability(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (_hotel_id, _suite_id, room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "available": false });
    let response = put_json_auth(app, &format!("/api/v1/admin/rooms/{room_id}"), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["available"], false);
    assert_eq!(json["name"], "Room 101");
}

/// Rooms with a zero guest capacity are rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_invalid_capacity(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (_hotel_id, suite_id, _room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "No Capacity",
        "price_per_night_cents": 10_000,
        "max_guests": 0
    });
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/suites/{suite_id}/rooms"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Deleting a room removes it from the hydrated hotel view.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_room(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (hotel_id, _suite_id, room_id) = seed_catalog(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/rooms/{room_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/hotels/{hotel_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["suites"][0]["rooms"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// RBAC tests
// ---------------------------------------------------------------------------

/// Catalog writes require the admin role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalog_writes_are_admin_only(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "shopper@test.com", 2).await;
    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "shopper@test.com", &password).await;
    let token = login_json["access_token"].as_str().unwrap();

    let body = serde_json::json!({ "name": "Nope", "price_per_night_cents": 1_000 });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/admin/hotels", body.clone(), token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/admin/hotels", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
