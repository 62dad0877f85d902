//! Common test infrastructure for database integration tests.

use fitness_config::DatabaseConfig;
use fitness_repository::{create_pool, DatabasePool, SqliteTrainingDao, SqliteUserDao};
use std::sync::Arc;

/// Private in-memory SQLite database with migrations applied.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated database.
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::sqlite_in_memory())
            .await
            .expect("Failed to create in-memory database");
        Self { pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    #[allow(dead_code)]
    pub fn user_dao(&self) -> SqliteUserDao {
        SqliteUserDao::new(self.pool())
    }

    #[allow(dead_code)]
    pub fn training_dao(&self) -> SqliteTrainingDao {
        SqliteTrainingDao::new(self.pool())
    }
}
