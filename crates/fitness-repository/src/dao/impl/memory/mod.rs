//! In-memory DAOs.
//!
//! Each DAO keeps an ordered primary map, an id sequence and the secondary
//! indexes its lookups need, all behind one `parking_lot::RwLock` so that
//! every call observes a consistent table.

mod index;
mod training_dao_impl;
mod user_dao_impl;

pub use training_dao_impl::{InMemoryTrainingDao, TrainingTable};
pub use user_dao_impl::{InMemoryUserDao, UserTable};
