//! # Fitness Domain
//!
//! The two record types of the tracker, [`User`] and [`Training`], plus the
//! closed [`ActivityType`] enumeration.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
