//! # Fitness Tracker Server
//!
//! Loads configuration, installs logging, wires the configured storage
//! backend and serves the REST API until Ctrl+C or SIGTERM.

use fitness_config::ConfigLoader;
use fitness_core::telemetry::{init_tracing, TelemetryConfig};
use fitness_core::FitnessResult;
use fitness_rest::{create_router, AppState};
use fitness_server::di::{AppModule, ServiceResolver};
use fitness_server::startup::{print_banner, print_startup_info, serve};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> FitnessResult<()> {
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            // configuration failed before logging could be configured from it
            let _ = init_tracing(&TelemetryConfig::default());
            return Err(e);
        }
    };
    let config = config_loader.get().await;

    init_tracing(&config.observability)?;
    print_banner();
    info!("Starting fitness tracker server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let module = AppModule::build(&config.database).await?;
    let state = AppState::new(module.user_service(), module.training_service());
    let router = create_router(state, &config.server);

    print_startup_info(&config);
    let result = serve(router, &config).await;

    module.shutdown().await;
    info!("Server shutdown complete");
    result
}
