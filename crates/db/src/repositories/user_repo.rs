use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::user::User;

/// Read-only access to the `users` table.
pub struct UserRepo;

impl UserRepo {
    /// List every user.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }
}
