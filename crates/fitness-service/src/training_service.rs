//! Training service trait definition.

use crate::dto::TrainingDto;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::{FitnessResult, Interface, TrainingId, UserId};
use fitness_domain::ActivityType;

/// Training service trait.
///
/// Returned DTOs embed the owning user while it exists and name it by id
/// once the reference dangles.
#[async_trait]
pub trait TrainingService: Interface + Send + Sync {
    /// Creates a training for an existing user.
    async fn create_training(&self, dto: TrainingDto) -> FitnessResult<TrainingDto>;

    /// Gets a training by ID.
    async fn get_training(&self, id: TrainingId) -> FitnessResult<TrainingDto>;

    /// Lists every training.
    async fn list_trainings(&self) -> FitnessResult<Vec<TrainingDto>>;

    /// Replaces every mutable field of training `id`, keeping its owner.
    async fn update_training(&self, id: TrainingId, dto: TrainingDto) -> FitnessResult<TrainingDto>;

    /// Trainings that ended strictly after `instant`.
    async fn list_finished_after(&self, instant: DateTime<Utc>) -> FitnessResult<Vec<TrainingDto>>;

    /// Trainings of one activity type.
    async fn list_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<TrainingDto>>;

    /// Trainings owned by `user_id`, which must exist.
    async fn list_by_user(&self, user_id: UserId) -> FitnessResult<Vec<TrainingDto>>;
}
