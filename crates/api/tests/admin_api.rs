//! HTTP-level integration tests for the admin dashboard, user management,
//! and application settings.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, create_test_user, delete_auth, get, get_auth, login_user, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn login_token(pool: &PgPool, email: &str, role_id: i64) -> (i64, String) {
    let (user, password) = create_test_user(pool, email, role_id).await;
    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, email, &password).await;
    let token = login_json["access_token"].as_str().unwrap().to_string();
    (user.id, token)
}

// ---------------------------------------------------------------------------
// Dashboard stats tests
// ---------------------------------------------------------------------------

/// Stats aggregate hotel, user, booking, and notification counters.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_stats(pool: PgPool) {
    let (_admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;
    let (_alice_id, alice) = login_token(&pool, "alice@test.com", 2).await;

    // One hotel with a bookable room.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Nile View", "price_per_night_cents": 45_000 });
    let response = post_json_auth(app, "/api/v1/admin/hotels", body, &admin).await;
    let hotel_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/hotels/{hotel_id}/suites"),
        serde_json::json!({ "name": "Suite" }),
        &admin,
    )
    .await;
    let suite_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/suites/{suite_id}/rooms"),
        serde_json::json!({ "name": "Room 1", "price_per_night_cents": 45_000 }),
        &admin,
    )
    .await;
    let room_id = body_json(response).await["id"].as_i64().unwrap();

    // Two bookings; confirm one (which also creates an unread notification).
    let check_in = Utc::now().date_naive() + Duration::days(7);
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({
            "room_id": room_id,
            "check_in": check_in.to_string(),
            "check_out": (check_in + Duration::days(2)).to_string(),
            "guests": 2
        });
        let response = post_json_auth(app, "/api/v1/bookings", body, &alice).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/bookings", &alice).await;
    let bookings = body_json(response).await;
    let first_id = bookings[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/v1/admin/bookings/{first_id}/status"),
        serde_json::json!({ "status": "confirmed" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/stats", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["hotels"], 1);
    assert_eq!(json["users"], 2);
    assert_eq!(json["bookings"], 2);
    assert_eq!(json["pending_bookings"], 1);
    assert_eq!(json["confirmed_bookings"], 1);
    assert_eq!(json["cancelled_bookings"], 0);
    assert_eq!(json["unread_notifications"], 1);
}

// ---------------------------------------------------------------------------
// User management tests
// ---------------------------------------------------------------------------

/// Admin can list users with resolved role names.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users(pool: PgPool) {
    let (_admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;
    let (_alice_id, _alice) = login_token(&pool, "alice@test.com", 2).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &admin).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json.as_array().expect("response body should be an array");
    assert_eq!(users.len(), 2);

    let roles: Vec<&str> = users.iter().map(|u| u["role"].as_str().unwrap()).collect();
    assert!(roles.contains(&"admin"));
    assert!(roles.contains(&"customer"));
    assert!(
        users.iter().all(|u| u.get("password_hash").is_none()),
        "hashes must never be serialized"
    );
}

/// GET /admin/users/{id} returns one user; unknown ids return 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_user(pool: PgPool) {
    let (_admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;
    let (alice_id, _alice) = login_token(&pool, "alice@test.com", 2).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/admin/users/{alice_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], alice_id);
    assert_eq!(json["role"], "customer");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users/999999", &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deactivation locks the account out of login.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_user(pool: PgPool) {
    let (_admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;
    let (alice_id, _alice) = login_token(&pool, "alice@test.com", 2).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/users/{alice_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "alice@test.com", "password": "test_password_123" });
    let response = common::post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admins cannot deactivate their own account.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cannot_deactivate_self(pool: PgPool) {
    let (admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/admin/users/{admin_id}"), &admin).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Settings tests
// ---------------------------------------------------------------------------

/// Settings are publicly readable and carry the seeded defaults.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_settings_public(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["app_name"], "محجوز");
    assert_eq!(json["default_currency"], "EGP");
    assert_eq!(json["maintenance_mode"], false);
}

/// Admin updates are partial; untouched fields keep their values.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_settings(pool: PgPool) {
    let (_admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "maintenance_mode": true, "support_phone": "+20 2 1234 5678" });
    let response = put_json_auth(app, "/api/v1/admin/settings", body, &admin).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["maintenance_mode"], true);
    assert_eq!(json["support_phone"], "+20 2 1234 5678");
    assert_eq!(json["app_name"], "محجوز");

    // The change is visible on the public endpoint.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings").await;
    let json = body_json(response).await;
    assert_eq!(json["maintenance_mode"], true);
}

/// A malformed currency code is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_settings_invalid_currency(pool: PgPool) {
    let (_admin_id, admin) = login_token(&pool, "admin@test.com", 1).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "default_currency": "egp£" });
    let response = put_json_auth(app, "/api/v1/admin/settings", body, &admin).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Settings writes require the admin role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_settings_admin_only(pool: PgPool) {
    let (_alice_id, alice) = login_token(&pool, "alice@test.com", 2).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "maintenance_mode": true });
    let response = put_json_auth(app, "/api/v1/admin/settings", body, &alice).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
