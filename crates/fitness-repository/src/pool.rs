//! Database connection pool management.

use async_trait::async_trait;
use fitness_config::DatabaseConfig;
use fitness_core::{FitnessError, FitnessResult, Interface};
use shaku::Component;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> FitnessResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> FitnessResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component, Clone)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Connects to the database described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> FitnessResult<Self> {
        info!("Connecting to SQLite database...");

        let mut options = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout());

        // an in-memory database disappears with its last connection
        options = if config.url.contains(":memory:") {
            options.idle_timeout(None).max_lifetime(None)
        } else {
            options.idle_timeout(Some(config.idle_timeout()))
        };

        let pool = options.connect(&config.url).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            FitnessError::Database(format!("Failed to connect: {}", e))
        })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Creates a `DatabasePool` around an existing pool.
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Shaku parameters that make a module component share this pool.
    #[must_use]
    pub fn parameters(&self) -> DatabasePoolParameters {
        DatabasePoolParameters {
            pool: self.pool.clone(),
        }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    async fn health_check(&self) -> FitnessResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| FitnessError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn run_migrations(&self) -> FitnessResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Connects and, when configured, migrates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> FitnessResult<std::sync::Arc<DatabasePool>> {
    let pool = DatabasePool::connect(config).await?;
    if config.run_migrations {
        pool.run_migrations().await?;
    }
    Ok(std::sync::Arc::new(pool))
}
