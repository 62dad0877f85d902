//! # Fitness Core
//!
//! Core types, traits, and error definitions for the fitness tracker.
//! Every other crate in the workspace builds on the abstractions here:
//! the unified error type, typed record ids, the store contract and the
//! clock that decides what "today" means.

pub mod clock;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use clock::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
