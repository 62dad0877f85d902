//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

pub mod training_service_impl;
pub mod user_service_impl;

pub use training_service_impl::TrainingServiceImpl;
pub use user_service_impl::UserServiceImpl;
