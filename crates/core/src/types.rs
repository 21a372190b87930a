use chrono::{DateTime, Utc};

/// Surrogate integer key type used by `reviews` and `comments`.
pub type DbId = i32;

/// Timestamp type for `created_at` columns (`TIMESTAMPTZ`).
pub type Timestamp = DateTime<Utc>;
