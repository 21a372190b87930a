//! Repository for the `reviews` table.
//!
//! Listing goes through the allow-list-validated query builder in
//! [`crate::query`]; the vote adjustment is a single atomic UPDATE so
//! concurrent increments to the same review cannot lose updates.

use sqlx::PgPool;
use tabletop_core::error::{CoreError, Entity};
use tabletop_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::review::{Review, ReviewDetail, ReviewSummary};
use crate::query::{self, SortColumn, SortOrder};

/// Column list for bare `reviews` rows.
const REVIEW_COLUMNS: &str = "\
    review_id, title, category, designer, owner, review_body, \
    review_img_url, created_at, votes";

pub struct ReviewRepo;

impl ReviewRepo {
    /// List reviews, optionally filtered by category, sorted by the given
    /// column and direction.
    ///
    /// A category filter that matches nothing is reported as
    /// [`CoreError::CategoryNotFoundOrEmpty`]: the API cannot distinguish
    /// an unknown category from a known one with no reviews, and does not
    /// try to.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        sort_by: SortColumn,
        order: SortOrder,
    ) -> DbResult<Vec<ReviewSummary>> {
        let sql = query::list_reviews_sql(category.is_some(), sort_by, order);

        let mut query = sqlx::query_as::<_, ReviewSummary>(&sql);
        if let Some(slug) = category {
            query = query.bind(slug);
        }

        let reviews = query.fetch_all(pool).await?;

        if reviews.is_empty() && category.is_some() {
            return Err(DbError::Core(CoreError::CategoryNotFoundOrEmpty));
        }

        Ok(reviews)
    }

    /// Fetch a single review with its aggregated comment count.
    pub async fn find_by_id(pool: &PgPool, review_id: DbId) -> DbResult<ReviewDetail> {
        sqlx::query_as::<_, ReviewDetail>(
            "SELECT reviews.review_id, reviews.title, reviews.category, \
                    reviews.designer, reviews.owner, reviews.review_body, \
                    reviews.review_img_url, reviews.created_at, reviews.votes, \
                    COUNT(comments.comment_id) AS comment_count \
             FROM reviews \
             LEFT JOIN comments ON comments.review_id = reviews.review_id \
             WHERE reviews.review_id = $1 \
             GROUP BY reviews.review_id",
        )
        .bind(review_id)
        .fetch_optional(pool)
        .await
        .map_err(|err| DbError::classify(err, Entity::Review))?
        .ok_or(DbError::Core(CoreError::NotFound {
            entity: Entity::Review,
        }))
    }

    /// Atomically add `inc_votes` to a review's vote count and return the
    /// updated row.
    ///
    /// The delta is applied in a single statement rather than
    /// read-modify-write; the store serializes conflicting writes to the
    /// same row.
    pub async fn adjust_votes(
        pool: &PgPool,
        review_id: DbId,
        inc_votes: i64,
    ) -> DbResult<Review> {
        let sql = format!(
            "UPDATE reviews SET votes = votes + $2 \
             WHERE review_id = $1 \
             RETURNING {REVIEW_COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&sql)
            .bind(review_id)
            .bind(inc_votes)
            .fetch_optional(pool)
            .await
            .map_err(|err| DbError::classify(err, Entity::Review))?
            .ok_or(DbError::Core(CoreError::NotFound {
                entity: Entity::Review,
            }))
    }

    /// Check whether a review exists. Used to disambiguate an empty
    /// comment listing.
    pub async fn exists(pool: &PgPool, review_id: DbId) -> DbResult<bool> {
        let found: Option<DbId> =
            sqlx::query_scalar("SELECT review_id FROM reviews WHERE review_id = $1")
                .bind(review_id)
                .fetch_optional(pool)
                .await?;
        Ok(found.is_some())
    }
}
