use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table. Users are seeded externally; this API
/// only reads them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
