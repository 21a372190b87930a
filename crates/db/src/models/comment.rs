use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabletop_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub body: String,
    pub review_id: DbId,
    pub author: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

/// POST /api/reviews/{review_id}/comments body. Both fields stay optional
/// so the handler can report exactly which one is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub username: Option<String>,
    pub body: Option<String>,
}
