//! Domain primitives shared by the database and API layers.

pub mod error;
pub mod types;
