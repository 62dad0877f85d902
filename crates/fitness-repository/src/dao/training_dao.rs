//! TrainingDao trait, low-level training data access.

use async_trait::async_trait;
use fitness_core::{FitnessResult, Interface, Store, TrainingId, UserId};
use fitness_domain::{ActivityType, Training};

/// Training store with indexed lookups.
///
/// Every lookup returns records in ascending id order.
#[async_trait]
pub trait TrainingDao: Store<Training, TrainingId> + Interface {
    /// Trainings of exactly this activity type.
    async fn find_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<Training>>;

    /// Trainings owned by `user_id`. No check that the user exists.
    async fn find_by_user_id(&self, user_id: UserId) -> FitnessResult<Vec<Training>>;
}
