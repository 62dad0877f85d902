//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).
//! This module contains concrete structs that implement those traits.

pub mod training_repository_impl;
pub mod user_repository_impl;

pub use training_repository_impl::TrainingRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;
