//! Server startup utilities.

use axum::Router;
use fitness_config::AppConfig;
use fitness_core::{FitnessError, FitnessResult};
use tokio::signal;
use tracing::{error, info};

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    _______ __
   / ____(_) /_____  ___  __________
  / /_  / / __/ __ \/ _ \/ ___/ ___/
 / __/ / / /_/ / / /  __(__  |__  )
/_/   /_/\__/_/ /_/\___/____/____/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Storage:     {}", config.database.backend);
    info!("REST API:    http://{}/api/v1", addr);
    info!("Health:      http://{}/health", addr);
    info!("{}", separator);
}

/// Binds the configured address and serves `router` until a shutdown signal.
pub async fn serve(router: Router, config: &AppConfig) -> FitnessResult<()> {
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FitnessError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FitnessError::Internal(format!("REST server error: {}", e)))
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
