//! # Fitness Service
//!
//! Entity services for users and trainings, the DTOs they exchange with
//! callers and the mappers between DTOs and stored entities.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod training_service;
pub mod user_service;

pub use dto::*;
pub use mappers::*;
pub use r#impl::{TrainingServiceImpl, UserServiceImpl};
pub use training_service::*;
pub use user_service::*;
