//! SQLite DAOs (SQLx).
//!
//! Dates are stored as ISO-8601 text, instants as RFC 3339 text with nanoseconds.

mod training_dao_impl;
mod user_dao_impl;

pub use training_dao_impl::SqliteTrainingDao;
pub use user_dao_impl::SqliteUserDao;
