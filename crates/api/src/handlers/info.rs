use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Static welcome payload listing the available endpoints.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub msg: &'static str,
    pub endpoints: &'static [&'static str],
}

const ENDPOINTS: &[&str] = &[
    "GET /api",
    "GET /api/categories",
    "GET /api/reviews",
    "GET /api/reviews/:review_id",
    "PATCH /api/reviews/:review_id",
    "GET /api/reviews/:review_id/comments",
    "POST /api/reviews/:review_id/comments",
    "DELETE /api/comments/:comment_id",
    "GET /api/users",
];

/// GET /api — welcome message and endpoint listing.
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfo {
        msg: "Welcome to the Board Game Reviews API",
        endpoints: ENDPOINTS,
    })
}
