//! # Fitness Repository
//!
//! Four-layer data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (query predicates)
//! UserRepositoryImpl             (repository impl, evaluates predicates)
//!   ↓  Arc<dyn UserDao>          (store contract + indexed lookups)
//! InMemoryUserDao / SqliteUserDao
//!   ↓
//! process memory / SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                       ← UserRepository, TrainingRepository
//!   impl/
//!     user_repository_impl.rs       ← UserRepositoryImpl
//!     training_repository_impl.rs   ← TrainingRepositoryImpl
//!   dao/
//!     user_dao.rs                   ← UserDao trait
//!     training_dao.rs               ← TrainingDao trait
//!     impl/
//!       memory/                     ← InMemoryUserDao, InMemoryTrainingDao
//!       sqlite/                     ← SqliteUserDao, SqliteTrainingDao
//!   pool.rs                         ← DatabasePool (SQLite)
//! ```

pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{TrainingDao, UserDao};
pub use pool::*;
pub use traits::*;
pub use r#impl::{TrainingRepositoryImpl, UserRepositoryImpl};

// Re-export DAO implementations for convenience
pub use dao::{InMemoryTrainingDao, InMemoryUserDao, SqliteTrainingDao, SqliteUserDao};
