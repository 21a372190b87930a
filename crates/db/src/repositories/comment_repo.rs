//! Repository for the `comments` table.

use sqlx::PgPool;
use tabletop_core::error::{CoreError, Entity};
use tabletop_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::comment::Comment;
use crate::repositories::ReviewRepo;

/// Column list for `comments` queries.
const COMMENT_COLUMNS: &str = "comment_id, body, review_id, author, votes, created_at";

pub struct CommentRepo;

impl CommentRepo {
    /// List a review's comments, newest first.
    ///
    /// An empty join result is ambiguous: the review may have no comments,
    /// or it may not exist at all. A second existence check resolves the
    /// ambiguity before emptiness is treated as success.
    pub async fn list_for_review(pool: &PgPool, review_id: DbId) -> DbResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE review_id = $1 \
             ORDER BY created_at DESC"
        );
        let comments = sqlx::query_as::<_, Comment>(&sql)
            .bind(review_id)
            .fetch_all(pool)
            .await?;

        if comments.is_empty() && !ReviewRepo::exists(pool, review_id).await? {
            return Err(DbError::Core(CoreError::NotFound {
                entity: Entity::Review,
            }));
        }

        Ok(comments)
    }

    /// Insert a comment and return the stored row. `votes` and
    /// `created_at` take their column defaults.
    ///
    /// A missing review or author surfaces as a foreign key violation;
    /// the classifier resolves which constraint fired.
    pub async fn create(
        pool: &PgPool,
        review_id: DbId,
        author: &str,
        body: &str,
    ) -> DbResult<Comment> {
        let sql = format!(
            "INSERT INTO comments (review_id, author, body) \
             VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&sql)
            .bind(review_id)
            .bind(author)
            .bind(body)
            .fetch_one(pool)
            .await
            .map_err(|err| DbError::classify(err, Entity::Comment))
    }

    /// Delete a comment by id. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, comment_id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
