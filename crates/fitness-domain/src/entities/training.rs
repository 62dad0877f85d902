//! Training entity.

use crate::ActivityType;
use chrono::{DateTime, Duration, Utc};
use fitness_core::{Entity, TrainingId, UserId};
use serde::{Deserialize, Serialize};

/// One recorded training session.
///
/// `user_id` is a plain reference: deleting the user leaves it dangling.
/// `end_time >= start_time` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    /// Store-assigned identifier, `None` until first save.
    pub id: Option<TrainingId>,

    /// Owning user.
    pub user_id: UserId,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    pub activity_type: ActivityType,

    /// Distance covered, non-negative.
    pub distance: f64,

    /// Average speed, non-negative.
    pub average_speed: f64,
}

impl Training {
    /// Creates an unsaved training owned by `user_id`.
    #[must_use]
    pub fn new(
        user_id: UserId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        activity_type: ActivityType,
        distance: f64,
        average_speed: f64,
    ) -> Self {
        Self {
            id: None,
            user_id,
            start_time,
            end_time,
            activity_type,
            distance,
            average_speed,
        }
    }

    /// Returns the same training carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: TrainingId) -> Self {
        self.id = Some(id);
        self
    }

    /// True if the session ended strictly after `instant`.
    #[must_use]
    pub fn finished_after(&self, instant: DateTime<Utc>) -> bool {
        self.end_time > instant
    }

    /// Wall-clock length of the session.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

impl Entity<TrainingId> for Training {
    fn id(&self) -> Option<TrainingId> {
        self.id
    }
}
