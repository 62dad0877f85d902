//! Application state for Axum handlers.

use fitness_service::{TrainingService, UserService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub training_service: Arc<dyn TrainingService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        training_service: Arc<dyn TrainingService>,
    ) -> Self {
        Self {
            user_service,
            training_service,
        }
    }

    /// Resolves both services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService> + HasComponent<dyn TrainingService>,
    {
        let user_service: Arc<dyn UserService> = module.resolve();
        let training_service: Arc<dyn TrainingService> = module.resolve();
        Self::new(user_service, training_service)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
