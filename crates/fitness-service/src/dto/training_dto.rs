//! Training DTO.

use super::UserDto;
use chrono::{DateTime, Utc};
use fitness_core::{TrainingId, UserId};
use fitness_domain::ActivityType;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How a training DTO names its owner.
///
/// Flattened into [`TrainingDto`] as either a `"user"` object or a
/// `"user_id"` number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingOwner {
    /// The full owning user.
    #[serde(rename = "user")]
    User(UserDto),
    /// Just the owner's id.
    #[serde(rename = "user_id")]
    UserId(UserId),
}

impl TrainingOwner {
    /// The owner's id, `None` for an embedded user that was never stored.
    #[must_use]
    pub fn owner_id(&self) -> Option<UserId> {
        match self {
            Self::User(user) => user.id,
            Self::UserId(id) => Some(*id),
        }
    }
}

/// External representation of a training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrainingDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TrainingId>,

    #[serde(flatten)]
    pub owner: TrainingOwner,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    pub activity_type: ActivityType,

    #[validate(range(min = 0.0, message = "Distance must not be negative"))]
    pub distance: f64,

    #[validate(range(min = 0.0, message = "Average speed must not be negative"))]
    pub average_speed: f64,
}
