//! DAO (Data Access Object) layer.
//!
//! DAOs fulfil the [`Store`](fitness_core::Store) contract for one data
//! source and add the lookups that source can answer from an index.
//!
//! Hierarchy:
//! ```text
//! Service → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod r#impl;
pub mod training_dao;
pub mod user_dao;

pub use r#impl::{InMemoryTrainingDao, InMemoryUserDao, SqliteTrainingDao, SqliteUserDao};
pub use training_dao::TrainingDao;
pub use user_dao::UserDao;
