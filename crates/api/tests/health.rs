//! Integration tests for the health check, the API welcome route, and
//! general HTTP behaviour (catch-all 404, request IDs).

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send};
use sqlx::PgPool;
use tabletop_api::error::MSG_NOTHING_HERE;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "tabletop-api");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: GET /api returns the welcome payload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn api_root_returns_welcome_and_endpoint_listing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert_eq!(json["msg"], "Welcome to the Board Game Reviews API");
    let endpoints = json["endpoints"].as_array().expect("endpoints array");
    assert!(endpoints.iter().any(|e| e == "GET /api/reviews"));
}

// ---------------------------------------------------------------------------
// Test: unmatched routes are swallowed by the catch-all 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404_with_fixed_message(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/aip").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_NOTHING_HERE);

    // Typos below /api fall through to the same catch-all.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/resivew").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_NOTHING_HERE);
}

// ---------------------------------------------------------------------------
// Test: a known path with an unregistered method gets the same catch-all
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn method_mismatch_returns_404_with_fixed_message(pool: PgPool) {
    // /api/users only registers GET; a PUT must not leak a bare 405.
    let app = common::build_test_app(pool.clone());
    let response = send(app, Method::PUT, "/api/users").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_NOTHING_HERE);

    let app = common::build_test_app(pool);
    let response = send(app, Method::DELETE, "/api/reviews/1").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_NOTHING_HERE);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
