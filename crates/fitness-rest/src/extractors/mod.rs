//! Custom Axum extractors and parameter parsing.

mod params;
mod validated;

pub use params::*;
pub use validated::*;
