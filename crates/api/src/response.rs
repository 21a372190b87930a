//! Typed response envelopes for API handlers.
//!
//! Each endpoint wraps its payload under a fixed key (`{"reviews": [...]}`,
//! `{"review": {...}}`, ...). These structs pin those keys at compile time
//! instead of ad-hoc `serde_json::json!` maps.

use serde::Serialize;
use tabletop_db::models::category::Category;
use tabletop_db::models::comment::Comment;
use tabletop_db::models::review::{Review, ReviewDetail, ReviewSummary};
use tabletop_db::models::user::User;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewSummary>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: ReviewDetail,
}

#[derive(Debug, Serialize)]
pub struct UpdatedReviewResponse {
    #[serde(rename = "updatedReview")]
    pub updated_review: Review,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct PostedCommentResponse {
    #[serde(rename = "postedComment")]
    pub posted_comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
