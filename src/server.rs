//! HTTP server initialization and runtime setup.
//!
//! Builds the mapping repository and link service, then runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::{InMemoryMappingRepository, JsonFileMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the repository selected by the configuration.
pub fn build_repository(config: &Config) -> Arc<dyn MappingRepository> {
    match config.storage {
        StorageBackend::File => Arc::new(JsonFileMappingRepository::new(&config.db_file)),
        StorageBackend::Memory => Arc::new(InMemoryMappingRepository::new()),
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping repository (JSON file or memory)
/// - Link service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// The mapping store is loaded once before binding so a corrupt file is
/// reported at startup rather than on the first request.
///
/// # Errors
///
/// Returns an error if:
/// - The mapping store cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config);

    let existing = repository
        .load()
        .await
        .context("Failed to load mapping store")?;
    tracing::info!(mappings = existing.len(), "Mapping store ready");

    let link_service =
        LinkService::new(repository).with_max_attempts(config.code_max_attempts);
    let state = AppState::new(Arc::new(link_service), config.base_url.clone());

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
