//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Known failure modes are
//! classified into domain errors at the call site; anything else bubbles
//! up as an opaque database error.

pub mod category_repo;
pub mod comment_repo;
pub mod review_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
