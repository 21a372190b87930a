//! Review listing query construction.
//!
//! Sort inputs are validated against a closed allow-list before anything
//! reaches the SQL text: only the enums' canonical identifiers are ever
//! interpolated, and all data values stay bound parameters.

use std::str::FromStr;

use tabletop_core::error::CoreError;

/// Columns reviews may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Owner,
    Title,
    ReviewId,
    Category,
    ReviewImgUrl,
    #[default]
    CreatedAt,
    Votes,
    Designer,
    CommentCount,
}

impl SortColumn {
    /// Canonical SQL identifier for this column.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Owner => "owner",
            SortColumn::Title => "title",
            SortColumn::ReviewId => "review_id",
            SortColumn::Category => "category",
            SortColumn::ReviewImgUrl => "review_img_url",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::Designer => "designer",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// Parse an optional query-param value. Absent or empty defaults to
    /// `created_at`.
    pub fn parse_param(value: Option<&str>) -> Result<Self, CoreError> {
        match value {
            None | Some("") => Ok(SortColumn::default()),
            Some(raw) => raw.parse(),
        }
    }
}

impl FromStr for SortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(SortColumn::Owner),
            "title" => Ok(SortColumn::Title),
            "review_id" => Ok(SortColumn::ReviewId),
            "category" => Ok(SortColumn::Category),
            "review_img_url" => Ok(SortColumn::ReviewImgUrl),
            "created_at" => Ok(SortColumn::CreatedAt),
            "votes" => Ok(SortColumn::Votes),
            "designer" => Ok(SortColumn::Designer),
            "comment_count" => Ok(SortColumn::CommentCount),
            other => Err(CoreError::InvalidSortField {
                value: other.to_string(),
            }),
        }
    }
}

/// Sort direction. Matching is case-sensitive: `ASC` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse an optional query-param value. Absent or empty defaults to
    /// descending.
    pub fn parse_param(value: Option<&str>) -> Result<Self, CoreError> {
        match value {
            None | Some("") => Ok(SortOrder::default()),
            Some(raw) => raw.parse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CoreError::InvalidOrder {
                value: other.to_string(),
            }),
        }
    }
}

/// Listing column list: every review column except `review_body`.
const REVIEW_SUMMARY_COLUMNS: &str = "\
    reviews.owner, reviews.title, reviews.review_id, reviews.category, \
    reviews.review_img_url, reviews.created_at, reviews.votes, reviews.designer";

/// Compose the "list reviews" statement.
///
/// `comment_count` is attached via a left join and group-by so commentless
/// reviews report zero. When `filtered` is set the statement carries a
/// `WHERE reviews.category = $1` clause; the category value itself is
/// always a bound parameter. Rows are ordered strictly by the chosen
/// column and direction, with no secondary tie-break.
pub fn list_reviews_sql(filtered: bool, sort_by: SortColumn, order: SortOrder) -> String {
    let where_clause = if filtered {
        "WHERE reviews.category = $1 "
    } else {
        ""
    };

    format!(
        "SELECT {REVIEW_SUMMARY_COLUMNS}, \
                COUNT(comments.comment_id) AS comment_count \
         FROM reviews \
         LEFT JOIN comments ON comments.review_id = reviews.review_id \
         {where_clause}\
         GROUP BY reviews.review_id \
         ORDER BY {column} {direction}",
        column = sort_by.as_sql(),
        direction = order.as_sql(),
    )
}
