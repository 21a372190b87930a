use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table. Read-only through this API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}
