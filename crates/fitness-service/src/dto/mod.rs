//! Data transfer objects.

mod training_dto;
mod user_dto;

pub use training_dto::*;
pub use user_dto::*;
