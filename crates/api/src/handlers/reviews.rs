//! Handlers for the reviews resource.
//!
//! Listing validates `sort_by` and `order` against the query builder's
//! allow-lists before any statement is issued; `category` is never
//! validated, only bound. Path ids are interpreted here, where the entity
//! is statically known.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tabletop_core::error::{CoreError, Entity};
use tabletop_db::models::review::UpdateVotes;
use tabletop_db::query::{SortColumn, SortOrder};
use tabletop_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::params::{parse_id, ListReviewsParams};
use crate::response::{ReviewResponse, ReviewsResponse, UpdatedReviewResponse};
use crate::state::AppState;

/// GET /api/reviews
///
/// Query params: `category` (equality filter), `sort_by` (allow-listed
/// column, default `created_at`), `order` (`asc`/`desc`, default `desc`).
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ListReviewsParams>,
) -> AppResult<impl IntoResponse> {
    let sort_by = SortColumn::parse_param(params.sort_by.as_deref())?;
    let order = SortOrder::parse_param(params.order.as_deref())?;

    // An empty category param reads as "no filter", matching sort_by/order.
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    let reviews = ReviewRepo::list(&state.pool, category, sort_by, order).await?;

    Ok(Json(ReviewsResponse { reviews }))
}

/// GET /api/reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id(&review_id, Entity::Review)?;

    let review = ReviewRepo::find_by_id(&state.pool, review_id).await?;

    Ok(Json(ReviewResponse { review }))
}

/// PATCH /api/reviews/{review_id}
///
/// Body `{"inc_votes": n}`. The adjustment is a single atomic UPDATE, so
/// concurrent increments to the same review cannot lose updates.
pub async fn patch_review_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<UpdateVotes>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id(&review_id, Entity::Review)?;
    let Json(input) = payload.map_err(|_| AppError::MalformedBody)?;
    let inc_votes = input.inc_votes.ok_or(CoreError::MissingField {
        field: "inc_votes".into(),
    })?;

    let updated_review = ReviewRepo::adjust_votes(&state.pool, review_id, inc_votes).await?;

    tracing::info!(
        review_id,
        inc_votes,
        votes = updated_review.votes,
        "Review votes adjusted",
    );

    Ok(Json(UpdatedReviewResponse { updated_review }))
}
