//! Domain entities.

mod training;
mod user;

pub use training::*;
pub use user::*;
