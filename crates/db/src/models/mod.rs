//! Row models and request DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus any `Deserialize` DTOs for requests that mutate it.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
