use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::category::Category;

/// Read-only access to the `categories` table.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT slug, description FROM categories")
                .fetch_all(pool)
                .await?;
        Ok(categories)
    }
}
