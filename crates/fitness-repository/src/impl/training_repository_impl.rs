//! `TrainingRepositoryImpl`, training query predicates over a [`TrainingDao`].
//!
//! [`TrainingDao`]: crate::dao::TrainingDao

use crate::{dao::TrainingDao, traits::TrainingRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::{FitnessResult, TrainingId};
use fitness_domain::{ActivityType, Training, User};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that evaluates training predicates.
#[derive(Component)]
#[shaku(interface = TrainingRepository)]
pub struct TrainingRepositoryImpl {
    #[shaku(inject)]
    training_dao: Arc<dyn TrainingDao>,
}

impl TrainingRepositoryImpl {
    /// Creates a new `TrainingRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(training_dao: Arc<dyn TrainingDao>) -> Self {
        Self { training_dao }
    }
}

#[async_trait]
impl TrainingRepository for TrainingRepositoryImpl {
    async fn save(&self, training: Training) -> FitnessResult<Training> {
        debug!("Repository: save training {:?}", training.id);
        self.training_dao.save(training).await
    }

    async fn find_by_id(&self, id: TrainingId) -> FitnessResult<Option<Training>> {
        debug!("Repository: find_by_id {}", id);
        self.training_dao.find_by_id(id).await
    }

    async fn find_all(&self) -> FitnessResult<Vec<Training>> {
        debug!("Repository: find_all trainings");
        self.training_dao.find_all().await
    }

    async fn exists_by_id(&self, id: TrainingId) -> FitnessResult<bool> {
        self.training_dao.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: TrainingId) -> FitnessResult<()> {
        debug!("Repository: delete training {}", id);
        self.training_dao.delete_by_id(id).await
    }

    async fn find_finished_after(&self, instant: DateTime<Utc>) -> FitnessResult<Vec<Training>> {
        debug!("Repository: find_finished_after {}", instant);
        let trainings = self.training_dao.find_all().await?;
        Ok(trainings
            .into_iter()
            .filter(|t| t.finished_after(instant))
            .collect())
    }

    async fn find_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<Training>> {
        debug!("Repository: find_by_activity_type {}", activity_type);
        self.training_dao.find_by_activity_type(activity_type).await
    }

    async fn find_by_user(&self, user: &User) -> FitnessResult<Vec<Training>> {
        debug!("Repository: find_by_user {:?}", user.id);
        match user.id {
            Some(user_id) => self.training_dao.find_by_user_id(user_id).await,
            None => Ok(Vec::new()),
        }
    }
}

impl std::fmt::Debug for TrainingRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingRepositoryImpl").finish_non_exhaustive()
    }
}
