//! `InMemoryTrainingDao`, trainings kept in process memory.

use super::index::SecondaryIndex;
use crate::dao::TrainingDao;
use async_trait::async_trait;
use fitness_core::{FitnessResult, Store, TrainingId, UserId};
use fitness_domain::{ActivityType, Training};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::BTreeMap;
use tracing::debug;

/// Backing table of [`InMemoryTrainingDao`].
#[derive(Debug, Default)]
pub struct TrainingTable {
    rows: BTreeMap<TrainingId, Training>,
    by_activity_type: SecondaryIndex<ActivityType, TrainingId>,
    by_user: SecondaryIndex<UserId, TrainingId>,
    last_id: i64,
}

impl TrainingTable {
    fn upsert(&mut self, mut training: Training) -> Training {
        let id = match training.id {
            Some(id) => {
                self.last_id = self.last_id.max(id.0);
                id
            }
            None => {
                self.last_id += 1;
                TrainingId(self.last_id)
            }
        };
        training.id = Some(id);

        if let Some(previous) = self.rows.insert(id, training.clone()) {
            self.unindex(id, &previous);
        }
        self.by_activity_type.insert(training.activity_type, id);
        self.by_user.insert(training.user_id, id);
        training
    }

    fn remove(&mut self, id: TrainingId) {
        if let Some(previous) = self.rows.remove(&id) {
            self.unindex(id, &previous);
        }
    }

    fn unindex(&mut self, id: TrainingId, training: &Training) {
        self.by_activity_type.remove(&training.activity_type, id);
        self.by_user.remove(&training.user_id, id);
    }

    fn select(&self, ids: Vec<TrainingId>) -> Vec<Training> {
        ids.into_iter()
            .filter_map(|id| self.rows.get(&id).cloned())
            .collect()
    }
}

/// Training DAO over an in-memory table.
#[derive(Component, Default)]
#[shaku(interface = TrainingDao)]
pub struct InMemoryTrainingDao {
    #[shaku(default)]
    table: RwLock<TrainingTable>,
}

impl InMemoryTrainingDao {
    /// Creates an empty DAO.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store<Training, TrainingId> for InMemoryTrainingDao {
    async fn save(&self, training: Training) -> FitnessResult<Training> {
        let saved = self.table.write().upsert(training);
        debug!("InMemoryTrainingDao: saved training {:?}", saved.id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: TrainingId) -> FitnessResult<Option<Training>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> FitnessResult<Vec<Training>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: TrainingId) -> FitnessResult<bool> {
        Ok(self.table.read().rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TrainingId) -> FitnessResult<()> {
        self.table.write().remove(id);
        Ok(())
    }
}

#[async_trait]
impl TrainingDao for InMemoryTrainingDao {
    async fn find_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<Training>> {
        let table = self.table.read();
        Ok(table.select(table.by_activity_type.get(&activity_type)))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> FitnessResult<Vec<Training>> {
        let table = self.table.read();
        Ok(table.select(table.by_user.get(&user_id)))
    }
}

impl std::fmt::Debug for InMemoryTrainingDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTrainingDao")
            .field("rows", &self.table.read().rows.len())
            .finish_non_exhaustive()
    }
}
