pub mod health;

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /api                                   welcome + endpoint listing
/// /api/categories                        list categories
/// /api/reviews                           list reviews (category/sort_by/order)
/// /api/reviews/{review_id}               get (GET), adjust votes (PATCH)
/// /api/reviews/{review_id}/comments      list (GET), post (POST)
/// /api/comments/{comment_id}             delete (DELETE)
/// /api/users                             list users
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::info::api_info))
        .route("/categories", get(handlers::categories::list_categories))
        .route("/reviews", get(handlers::reviews::list_reviews))
        .route(
            "/reviews/{review_id}",
            get(handlers::reviews::get_review).patch(handlers::reviews::patch_review_votes),
        )
        .route(
            "/reviews/{review_id}/comments",
            get(handlers::comments::list_review_comments).post(handlers::comments::post_comment),
        )
        .route(
            "/comments/{comment_id}",
            delete(handlers::comments::delete_comment),
        )
        .route("/users", get(handlers::users::list_users))
}
