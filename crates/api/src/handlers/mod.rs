pub mod categories;
pub mod comments;
pub mod info;
pub mod reviews;
pub mod users;
