//! Application error type and its translation to HTTP responses.
//!
//! Every error response carries a `{"msg": "..."}` body with one of the
//! fixed messages below. Domain errors arrive already tagged with the
//! entity they refer to, so no request-path inspection happens here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tabletop_core::error::{CoreError, Entity};
use tabletop_db::error::DbError;

pub const MSG_REVIEW_NOT_FOUND: &str =
    "We couldn't find any reviews with that ID. Check your request and try again.";
pub const MSG_COMMENT_NOT_FOUND: &str =
    "We couldn't find any comments with that ID. Check your request and try again.";
pub const MSG_USER_NOT_FOUND: &str =
    "We couldn't find any users with that username. Check your request and try again.";
pub const MSG_CATEGORY_NOT_FOUND: &str =
    "We couldn't find any reviews in that category. Check your request and try again.";
pub const MSG_BAD_REQUEST: &str =
    "Something's not quite right with your request. Check your spelling and try again.";
pub const MSG_MISSING_FIELD: &str =
    "Your request is missing a required field. Check your request and try again.";
pub const MSG_INVALID_SORT: &str =
    "Reviews can't be sorted by that. Check your request and try again.";
pub const MSG_INVALID_ORDER: &str =
    "Reviews can only be ordered 'asc' or 'desc'. Check your request and try again.";
pub const MSG_NOTHING_HERE: &str = "Nothing here. Check your spelling and try again.";
pub const MSG_INTERNAL: &str = "Something went wrong on our end. Try again later.";

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and storage error types and implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error raised directly by a handler.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the storage layer.
    #[error(transparent)]
    Db(#[from] DbError),

    /// The request body could not be parsed (absent, malformed, or
    /// mistyped JSON).
    #[error("malformed request body")]
    MalformedBody,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Core(core) => core_response(&core),
            AppError::Db(DbError::Core(core)) => core_response(&core),
            AppError::Db(DbError::Sqlx(err)) => {
                tracing::error!(error = %err, "Unclassified database error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
            AppError::MalformedBody => (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
        };

        (status, axum::Json(json!({ "msg": msg }))).into_response()
    }
}

/// Map a domain error to its HTTP status and fixed user-facing message.
pub fn core_response(err: &CoreError) -> (StatusCode, &'static str) {
    match err {
        CoreError::NotFound { entity }
        | CoreError::ReferenceNotFound { entity }
        | CoreError::OutOfRange { entity } => {
            (StatusCode::NOT_FOUND, entity_not_found_msg(*entity))
        }
        CoreError::InvalidValue => (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
        CoreError::MissingField { .. } => (StatusCode::BAD_REQUEST, MSG_MISSING_FIELD),
        CoreError::InvalidSortField { .. } => (StatusCode::BAD_REQUEST, MSG_INVALID_SORT),
        CoreError::InvalidOrder { .. } => (StatusCode::BAD_REQUEST, MSG_INVALID_ORDER),
        CoreError::CategoryNotFoundOrEmpty => (StatusCode::NOT_FOUND, MSG_CATEGORY_NOT_FOUND),
    }
}

fn entity_not_found_msg(entity: Entity) -> &'static str {
    match entity {
        Entity::Review => MSG_REVIEW_NOT_FOUND,
        Entity::Comment => MSG_COMMENT_NOT_FOUND,
        Entity::User => MSG_USER_NOT_FOUND,
    }
}
