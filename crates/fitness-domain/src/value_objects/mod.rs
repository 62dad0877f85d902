//! Value objects.

mod activity_type;

pub use activity_type::*;
