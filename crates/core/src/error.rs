use std::fmt;

/// The entity a failure refers to.
///
/// Attached where the storage call is made, so the calling context ("this
/// is a review id", "this is a comment id") never has to be re-derived
/// from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Review,
    Comment,
    User,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Review => "review",
            Entity::Comment => "comment",
            Entity::User => "user",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: Entity },

    /// An insert referenced a row that does not exist (foreign key target).
    #[error("referenced {entity} does not exist")]
    ReferenceNotFound { entity: Entity },

    /// A syntactically numeric value that exceeds the column's range.
    /// Oversized ids read the same as unknown ones (not found).
    #[error("value out of range for {entity}")]
    OutOfRange { entity: Entity },

    /// A malformed identifier or value where a number was expected.
    #[error("malformed identifier or value")]
    InvalidValue,

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("cannot sort reviews by '{value}'")]
    InvalidSortField { value: String },

    #[error("invalid sort order '{value}'")]
    InvalidOrder { value: String },

    /// A category filter that matched nothing. The category may be unknown
    /// or may simply have no reviews; the two cases are deliberately
    /// conflated.
    #[error("no reviews found for that category")]
    CategoryNotFoundOrEmpty,
}
