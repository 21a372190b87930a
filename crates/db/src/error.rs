//! Storage error type and Postgres error classification.
//!
//! Constraint violations are translated into tagged domain errors at the
//! point the store call is made, where the entity in context is statically
//! known. Only the SQLSTATE codes below carry domain meaning; everything
//! else passes through as an opaque [`DbError::Sqlx`].

use sqlx::postgres::PgDatabaseError;
use tabletop_core::error::{CoreError, Entity};

/// `invalid_text_representation`: malformed value for the column type.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// `numeric_value_out_of_range`: syntactically numeric but too large.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
/// `not_null_violation`: a required column was not supplied.
const NOT_NULL_VIOLATION: &str = "23502";
/// `foreign_key_violation`: an insert referenced a missing row.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Error type returned by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A classified domain error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unclassified database error.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// Classify a sqlx error raised while operating on `entity`.
    ///
    /// Foreign key violations resolve the referenced table from the
    /// constraint name; out-of-range and malformed-value codes apply to
    /// the entity in context. Unrecognized errors pass through untouched.
    pub fn classify(err: sqlx::Error, entity: Entity) -> Self {
        match classify_database_error(&err, entity) {
            Some(core) => DbError::Core(core),
            None => {
                tracing::debug!(%entity, error = %err, "Database error left unclassified");
                DbError::Sqlx(err)
            }
        }
    }
}

fn classify_database_error(err: &sqlx::Error, entity: Entity) -> Option<CoreError> {
    let db_err = err.as_database_error()?;
    let code = db_err.code()?;

    match code.as_ref() {
        INVALID_TEXT_REPRESENTATION => Some(CoreError::InvalidValue),
        NUMERIC_VALUE_OUT_OF_RANGE => Some(CoreError::OutOfRange { entity }),
        NOT_NULL_VIOLATION => {
            let field = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(PgDatabaseError::column)
                .unwrap_or("unknown")
                .to_string();
            Some(CoreError::MissingField { field })
        }
        FOREIGN_KEY_VIOLATION => match db_err.constraint() {
            Some(name) if name.contains("review_id") => Some(CoreError::ReferenceNotFound {
                entity: Entity::Review,
            }),
            Some(name) if name.contains("author") => Some(CoreError::ReferenceNotFound {
                entity: Entity::User,
            }),
            _ => None,
        },
        _ => None,
    }
}
