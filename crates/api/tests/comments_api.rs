//! Integration tests for the comment endpoints: listing a review's comments,
//! posting a new comment, and deleting one.

mod common;

use axum::http::{Method, StatusCode};
use chrono::{DateTime, Utc};
use common::{body_bytes, body_json, get, send, send_json};
use serde_json::json;
use sqlx::PgPool;
use tabletop_api::error::{
    MSG_BAD_REQUEST, MSG_COMMENT_NOT_FOUND, MSG_MISSING_FIELD, MSG_REVIEW_NOT_FOUND,
    MSG_USER_NOT_FOUND,
};

fn created_at(comment: &serde_json::Value) -> DateTime<Utc> {
    comment["created_at"]
        .as_str()
        .expect("created_at string")
        .parse()
        .expect("created_at parses as RFC 3339")
}

// ---------------------------------------------------------------------------
// GET /api/reviews/{review_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_returns_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/3/comments").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let comments = json["comments"].as_array().expect("comments array");
    assert_eq!(comments.len(), 3);

    for comment in comments {
        assert!(comment["comment_id"].is_i64());
        assert!(comment["body"].is_string());
        assert_eq!(comment["review_id"], 3);
        assert!(comment["author"].is_string());
        assert!(comment["votes"].is_i64());
        assert!(comment["created_at"].is_string());
    }

    for pair in comments.windows(2) {
        assert!(created_at(&pair[0]) >= created_at(&pair[1]));
    }
    assert_eq!(comments[0]["comment_id"], 6);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_for_commentless_review_is_empty_200(pool: PgPool) {
    // Review 1 exists but has no comments; that is an empty list, not an
    // error.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/1/comments").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["comments"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_unknown_review_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/999/comments").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_REVIEW_NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn list_comments_non_numeric_review_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/nine/comments").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// POST /api/reviews/{review_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn post_comment_creates_and_returns_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/reviews/1/comments",
        json!({ "username": "mallionaire", "body": "Great game!" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let comment = &json["postedComment"];
    assert_eq!(comment["comment_id"], 7);
    assert_eq!(comment["body"], "Great game!");
    assert_eq!(comment["review_id"], 1);
    assert_eq!(comment["author"], "mallionaire");
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());

    // The comment is now visible under its review.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/reviews/1/comments").await).await;
    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["comment_id"], 7);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn post_comment_missing_fields_is_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/reviews/1/comments",
        json!({ "username": "mallionaire" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_MISSING_FIELD);

    let app = common::build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/reviews/1/comments",
        json!({ "body": "Great game!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn post_comment_to_unknown_review_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/reviews/999/comments",
        json!({ "username": "mallionaire", "body": "Great game!" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_REVIEW_NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn post_comment_from_unknown_user_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/reviews/1/comments",
        json!({ "username": "nobody", "body": "Great game!" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_USER_NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn post_comment_with_malformed_body_is_400(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/reviews/1/comments")
        .header("content-type", "application/json")
        .body(Body::from("not json at all"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// DELETE /api/comments/{comment_id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_comment_returns_204_and_removes_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = send(app, Method::DELETE, "/api/comments/1").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    // Review 2 had three comments; one is gone now.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/reviews/2/comments").await).await;
    assert_eq!(json["comments"].as_array().unwrap().len(), 2);

    // Deleting the same comment twice is a 404.
    let app = common::build_test_app(pool);
    let response = send(app, Method::DELETE, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_COMMENT_NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_comment_unknown_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::DELETE, "/api/comments/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_COMMENT_NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_comment_non_numeric_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::DELETE, "/api/comments/not-an-id").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn delete_comment_oversized_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::DELETE, "/api/comments/6666666666666666666666666").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], MSG_COMMENT_NOT_FOUND);
}
