//! Activity type value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of sport a training records. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Running,
    Cycling,
    Walking,
    Swimming,
    Tennis,
}

/// Returned when a textual activity type names none of the variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

impl ActivityType {
    /// Returns all activity types.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Running,
            Self::Cycling,
            Self::Walking,
            Self::Swimming,
            Self::Tennis,
        ]
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Cycling => "CYCLING",
            Self::Walking => "WALKING",
            Self::Swimming => "SWIMMING",
            Self::Tennis => "TENNIS",
        }
    }
}

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    /// Parses case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
