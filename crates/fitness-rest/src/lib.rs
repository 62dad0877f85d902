//! # Fitness REST
//!
//! REST API layer using Axum for the fitness tracker.
//! Exposes the user and training services as JSON endpoints under `/api/v1`.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
