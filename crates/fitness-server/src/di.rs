//! Dependency injection modules using Shaku.
//!
//! - `InMemoryModule`: indexed in-process stores, nothing outlives the process
//! - `SqliteModule`: SQLite stores sharing one connection pool

use fitness_config::{DatabaseBackend, DatabaseConfig};
use fitness_core::{Clock, FitnessResult, SystemClock};
use fitness_repository::{
    create_pool, DatabasePool, DatabasePoolInterface, InMemoryTrainingDao, InMemoryUserDao,
    SqliteTrainingDao, SqliteUserDao, TrainingRepository, TrainingRepositoryImpl,
    UserRepository, UserRepositoryImpl,
};
use fitness_service::{TrainingService, TrainingServiceImpl, UserService, UserServiceImpl};
use shaku::{module, HasComponent};
use std::sync::Arc;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

module! {
    pub InMemoryModule {
        components = [
            InMemoryUserDao,
            InMemoryTrainingDao,
            UserRepositoryImpl,
            TrainingRepositoryImpl,
            SystemClock,
            UserServiceImpl,
            TrainingServiceImpl,
        ],
        providers = [],
    }
}

module! {
    pub SqliteModule {
        components = [
            DatabasePool,
            SqliteUserDao,
            SqliteTrainingDao,
            UserRepositoryImpl,
            TrainingRepositoryImpl,
            SystemClock,
            UserServiceImpl,
            TrainingServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Builds a module whose stores live in process memory.
#[must_use]
pub fn build_in_memory_module() -> Arc<InMemoryModule> {
    Arc::new(InMemoryModule::builder().build())
}

/// Connects (and migrates, if configured) the database and builds a SQLite module.
pub async fn build_sqlite_module(db_config: &DatabaseConfig) -> FitnessResult<Arc<SqliteModule>> {
    let db_pool = create_pool(db_config).await?;

    let module = SqliteModule::builder()
        .with_component_parameters::<DatabasePool>(db_pool.parameters())
        .build();

    Ok(Arc::new(module))
}

/// The module selected by configuration.
pub enum AppModule {
    /// Volatile in-process stores.
    Memory(Arc<InMemoryModule>),
    /// SQLite-backed stores.
    Sqlite(Arc<SqliteModule>),
}

impl AppModule {
    /// Builds the module for `db_config.backend`.
    pub async fn build(db_config: &DatabaseConfig) -> FitnessResult<Self> {
        Ok(match db_config.backend {
            DatabaseBackend::Memory => Self::Memory(build_in_memory_module()),
            DatabaseBackend::Sqlite => Self::Sqlite(build_sqlite_module(db_config).await?),
        })
    }

    /// Releases backend resources.
    pub async fn shutdown(&self) {
        if let Self::Sqlite(module) = self {
            module.database_pool().close().await;
        }
    }
}

impl ServiceResolver for AppModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        match self {
            Self::Memory(module) => module.user_service(),
            Self::Sqlite(module) => module.user_service(),
        }
    }

    fn training_service(&self) -> Arc<dyn TrainingService> {
        match self {
            Self::Memory(module) => module.training_service(),
            Self::Sqlite(module) => module.training_service(),
        }
    }
}

impl std::fmt::Debug for AppModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory(_) => f.write_str("AppModule::Memory"),
            Self::Sqlite(_) => f.write_str("AppModule::Sqlite"),
        }
    }
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving the services from any module.
pub trait ServiceResolver {
    /// Resolves the user service.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the training service.
    fn training_service(&self) -> Arc<dyn TrainingService>;
}

impl ServiceResolver for InMemoryModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn training_service(&self) -> Arc<dyn TrainingService> {
        self.resolve()
    }
}

impl ServiceResolver for SqliteModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn training_service(&self) -> Arc<dyn TrainingService> {
        self.resolve()
    }
}

/// Trait for resolving repositories from modules.
pub trait RepositoryResolver {
    /// Resolves the user repository.
    fn user_repository(&self) -> Arc<dyn UserRepository>;

    /// Resolves the training repository.
    fn training_repository(&self) -> Arc<dyn TrainingRepository>;
}

impl RepositoryResolver for InMemoryModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }

    fn training_repository(&self) -> Arc<dyn TrainingRepository> {
        self.resolve()
    }
}

impl RepositoryResolver for SqliteModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }

    fn training_repository(&self) -> Arc<dyn TrainingRepository> {
        self.resolve()
    }
}

/// Trait for resolving the database pool from modules that have one.
pub trait DatabaseResolver {
    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for SqliteModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

/// Trait for resolving the clock.
pub trait ClockResolver {
    /// Resolves the clock.
    fn clock(&self) -> Arc<dyn Clock>;
}

impl ClockResolver for InMemoryModule {
    fn clock(&self) -> Arc<dyn Clock> {
        self.resolve()
    }
}

impl ClockResolver for SqliteModule {
    fn clock(&self) -> Arc<dyn Clock> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use fitness_service::{TrainingDto, TrainingOwner, UserDto};

    async fn exercise(users: Arc<dyn UserService>, trainings: Arc<dyn TrainingService>) {
        let user = users
            .create_user(UserDto {
                id: None,
                first_name: "Ann".to_string(),
                last_name: "K".to_string(),
                birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                email: "ann@x.com".to_string(),
            })
            .await
            .unwrap();
        let user_id = user.id.unwrap();

        let training = trainings
            .create_training(TrainingDto {
                id: None,
                owner: TrainingOwner::UserId(user_id),
                start_time: Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap(),
                activity_type: "walking".parse().unwrap(),
                distance: 5.0,
                average_speed: 5.0,
            })
            .await
            .unwrap();

        assert_eq!(training.owner.owner_id(), Some(user_id));
        assert_eq!(trainings.list_by_user(user_id).await.unwrap().len(), 1);
    }

    #[test]
    fn test_module_types_exist() {
        fn _assert_service_resolver<T: ServiceResolver>() {}
        fn _assert_repository_resolver<T: RepositoryResolver>() {}
        fn _assert_database_resolver<T: DatabaseResolver>() {}
        fn _assert_has_services<T: HasComponent<dyn UserService> + HasComponent<dyn TrainingService>>() {}

        _assert_service_resolver::<InMemoryModule>();
        _assert_service_resolver::<SqliteModule>();
        _assert_service_resolver::<AppModule>();
        _assert_repository_resolver::<InMemoryModule>();
        _assert_repository_resolver::<SqliteModule>();
        _assert_database_resolver::<SqliteModule>();
        _assert_has_services::<InMemoryModule>();
        _assert_has_services::<SqliteModule>();
    }

    #[tokio::test]
    async fn test_in_memory_module_wires_services() {
        let module = build_in_memory_module();
        exercise(module.user_service(), module.training_service()).await;

        assert_eq!(module.user_repository().find_all().await.unwrap().len(), 1);
        assert!(module.clock().today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[tokio::test]
    async fn test_sqlite_module_wires_services() {
        let module = build_sqlite_module(&DatabaseConfig::sqlite_in_memory())
            .await
            .unwrap();
        module.database_pool().health_check().await.unwrap();

        exercise(module.user_service(), module.training_service()).await;

        assert_eq!(module.training_repository().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_app_module_follows_backend() {
        let memory = AppModule::build(&DatabaseConfig::default()).await.unwrap();
        assert!(matches!(memory, AppModule::Memory(_)));

        let config = DatabaseConfig {
            backend: DatabaseBackend::Sqlite,
            ..DatabaseConfig::sqlite_in_memory()
        };
        let sqlite = AppModule::build(&config).await.unwrap();
        assert!(matches!(sqlite, AppModule::Sqlite(_)));
        assert!(sqlite.user_service().list_users().await.unwrap().is_empty());
        sqlite.shutdown().await;
    }
}
