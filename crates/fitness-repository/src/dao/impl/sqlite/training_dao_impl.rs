//! `SqliteTrainingDao`, trainings in the `trainings` table.

use crate::dao::TrainingDao;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::{FitnessError, FitnessResult, Store, TrainingId, UserId};
use fitness_domain::{ActivityType, Training};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_TRAININGS: &str = "SELECT id, user_id, start_time, end_time, activity_type, \
                                distance, average_speed FROM trainings";

/// Training DAO backed by SQLite.
#[derive(Component, Clone)]
#[shaku(interface = TrainingDao)]
pub struct SqliteTrainingDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteTrainingDao {
    /// Creates a new SQLite training DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a training.
#[derive(Debug, FromRow)]
struct TrainingRow {
    id: i64,
    user_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    activity_type: String,
    distance: f64,
    average_speed: f64,
}

impl TryFrom<TrainingRow> for Training {
    type Error = FitnessError;

    fn try_from(row: TrainingRow) -> Result<Self, Self::Error> {
        let activity_type: ActivityType = row.activity_type.parse().map_err(|e| {
            FitnessError::Internal(format!("Invalid activity type in database: {}", e))
        })?;

        Ok(Training {
            id: Some(TrainingId(row.id)),
            user_id: UserId(row.user_id),
            start_time: row.start_time,
            end_time: row.end_time,
            activity_type,
            distance: row.distance,
            average_speed: row.average_speed,
        })
    }
}

#[async_trait]
impl Store<Training, TrainingId> for SqliteTrainingDao {
    async fn save(&self, training: Training) -> FitnessResult<Training> {
        debug!("Saving training: {:?}", training.id);

        let result = match training.id {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO trainings
                        (id, user_id, start_time, end_time, activity_type, distance, average_speed)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(id.0)
                .bind(training.user_id.0)
                .bind(training.start_time)
                .bind(training.end_time)
                .bind(training.activity_type.as_str())
                .bind(training.distance)
                .bind(training.average_speed)
                .execute(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO trainings
                        (user_id, start_time, end_time, activity_type, distance, average_speed)
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(training.user_id.0)
                .bind(training.start_time)
                .bind(training.end_time)
                .bind(training.activity_type.as_str())
                .bind(training.distance)
                .bind(training.average_speed)
                .execute(self.pool.inner())
                .await?
            }
        };

        let id = training.id.unwrap_or(TrainingId(result.last_insert_rowid()));
        self.find_by_id(id)
            .await?
            .ok_or_else(|| FitnessError::Internal(format!("Training {} vanished after save", id)))
    }

    async fn find_by_id(&self, id: TrainingId) -> FitnessResult<Option<Training>> {
        debug!("Finding training by id: {}", id);

        let row = sqlx::query_as::<_, TrainingRow>(&format!("{SELECT_TRAININGS} WHERE id = ?"))
            .bind(id.0)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Training::try_from).transpose()
    }

    async fn find_all(&self) -> FitnessResult<Vec<Training>> {
        debug!("Finding all trainings");
        let rows = sqlx::query_as::<_, TrainingRow>(&format!("{SELECT_TRAININGS} ORDER BY id"))
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Training::try_from).collect()
    }

    async fn exists_by_id(&self, id: TrainingId) -> FitnessResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trainings WHERE id = ?")
            .bind(id.0)
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: TrainingId) -> FitnessResult<()> {
        debug!("Deleting training: {}", id);

        sqlx::query("DELETE FROM trainings WHERE id = ?")
            .bind(id.0)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TrainingDao for SqliteTrainingDao {
    async fn find_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<Training>> {
        debug!("Finding trainings by activity type: {}", activity_type);
        let rows = sqlx::query_as::<_, TrainingRow>(&format!(
            "{SELECT_TRAININGS} WHERE activity_type = ? ORDER BY id"
        ))
        .bind(activity_type.as_str())
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Training::try_from).collect()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> FitnessResult<Vec<Training>> {
        debug!("Finding trainings by user: {}", user_id);
        let rows = sqlx::query_as::<_, TrainingRow>(&format!(
            "{SELECT_TRAININGS} WHERE user_id = ? ORDER BY id"
        ))
        .bind(user_id.0)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Training::try_from).collect()
    }
}

impl std::fmt::Debug for SqliteTrainingDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteTrainingDao").finish_non_exhaustive()
    }
}
