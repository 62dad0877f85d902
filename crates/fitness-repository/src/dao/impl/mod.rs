//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module.
//! Implementations are organized by technology.

pub mod memory;
pub mod sqlite;

pub use memory::{InMemoryTrainingDao, InMemoryUserDao};
pub use sqlite::{SqliteTrainingDao, SqliteUserDao};
