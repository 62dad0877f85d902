//! Result type aliases for the fitness tracker.

use crate::FitnessError;

/// A specialized `Result` type for fitness tracker operations.
pub type FitnessResult<T> = Result<T, FitnessError>;
