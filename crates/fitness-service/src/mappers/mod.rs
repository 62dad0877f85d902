//! Entity-DTO mappers.
//!
//! Mapping is pure: no store access, no validation. Absent in, absent out.

mod training_mapper;
mod user_mapper;

pub use training_mapper::TrainingMapper;
pub use user_mapper::UserMapper;
