//! Shared query parameter types and identifier parsing.

use std::num::IntErrorKind;

use serde::Deserialize;
use tabletop_core::error::{CoreError, Entity};
use tabletop_core::types::DbId;

/// Query parameters for GET /api/reviews.
#[derive(Debug, Default, Deserialize)]
pub struct ListReviewsParams {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Interpret a path segment as an id for the given entity.
///
/// Non-numeric input is a malformed request (400). Input that is numeric
/// but exceeds the id column's range is treated as not-found (404), so an
/// oversized id reads the same as an unknown one.
pub fn parse_id(raw: &str, entity: Entity) -> Result<DbId, CoreError> {
    raw.parse::<DbId>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoreError::OutOfRange { entity },
        _ => CoreError::InvalidValue,
    })
}
