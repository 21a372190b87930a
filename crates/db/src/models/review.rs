use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabletop_core::types::{DbId, Timestamp};

/// A bare row from the `reviews` table, as returned by the vote update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub review_id: DbId,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: Timestamp,
    pub votes: i32,
}

/// A single review joined with its aggregated comment count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewDetail {
    pub review_id: DbId,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i64,
}

/// A listing row: every review column except `review_body`, plus the
/// aggregated comment count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewSummary {
    pub owner: String,
    pub title: String,
    pub review_id: DbId,
    pub category: String,
    pub review_img_url: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub designer: String,
    pub comment_count: i64,
}

/// PATCH /api/reviews/{review_id} body. `inc_votes` stays optional so the
/// handler can report a missing field before the store is touched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVotes {
    pub inc_votes: Option<i64>,
}
