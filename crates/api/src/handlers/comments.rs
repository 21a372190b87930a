//! Handlers for the comments resource.
//!
//! Comment creation checks its required fields before touching the store;
//! missing referenced rows (review or author) surface as foreign key
//! violations that the storage layer has already tagged with the entity
//! they refer to.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tabletop_core::error::{CoreError, Entity};
use tabletop_db::models::comment::CreateComment;
use tabletop_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::params::parse_id;
use crate::response::{CommentsResponse, PostedCommentResponse};
use crate::state::AppState;

/// GET /api/reviews/{review_id}/comments
///
/// A review with no comments yields an empty array, not an error; an
/// unknown review yields 404. The storage layer runs the existence check
/// that tells the two apart.
pub async fn list_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id(&review_id, Entity::Review)?;

    let comments = CommentRepo::list_for_review(&state.pool, review_id).await?;

    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/reviews/{review_id}/comments
///
/// Body `{"username": ..., "body": ...}`. Returns the stored comment with
/// its generated id, zero votes, and creation time.
pub async fn post_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<CreateComment>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let review_id = parse_id(&review_id, Entity::Review)?;
    let Json(input) = payload.map_err(|_| AppError::MalformedBody)?;

    let username = input.username.ok_or(CoreError::MissingField {
        field: "username".into(),
    })?;
    let body = input.body.ok_or(CoreError::MissingField {
        field: "body".into(),
    })?;

    let posted_comment = CommentRepo::create(&state.pool, review_id, &username, &body).await?;

    tracing::info!(
        review_id,
        comment_id = posted_comment.comment_id,
        author = %username,
        "Comment posted",
    );

    Ok((
        StatusCode::CREATED,
        Json(PostedCommentResponse { posted_comment }),
    ))
}

/// DELETE /api/comments/{comment_id}
///
/// Returns 204 with no body; deleting an unknown comment is 404.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let comment_id = parse_id(&comment_id, Entity::Comment)?;

    let deleted = CommentRepo::delete(&state.pool, comment_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: Entity::Comment,
        }));
    }

    tracing::info!(comment_id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
