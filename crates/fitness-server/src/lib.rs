//! # Fitness Server Library
//!
//! Dependency injection wiring and startup utilities for the fitness
//! tracker server. The binary picks a module by configured backend.

pub mod di;
pub mod startup;
