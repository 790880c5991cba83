//! RouteGuide Server
//!
//! Configuration, logging, and startup for the RouteGuide gRPC service.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::Cli;
pub use config::{ConfigError, ServerSettings};

use anyhow::Context;
use routeguide_domain::LandmarkLookup;
use routeguide_grpc::{start_server, RouteGuideHandlers};
use routeguide_store::{dataset, LandmarkIndex};
use tracing::info;

/// Load the dataset, then serve until Ctrl-C
///
/// A dataset that cannot be loaded aborts startup before any port is bound.
pub async fn run(settings: ServerSettings) -> anyhow::Result<()> {
    info!("Starting RouteGuide server");
    info!("Bind address: {}", settings.bind_addr());

    let landmarks = dataset::load_landmarks(&settings.dataset_path)
        .with_context(|| format!("loading dataset {}", settings.dataset_path.display()))?;
    let index = LandmarkIndex::new(landmarks);
    info!(
        landmarks = index.len(),
        named = index.landmarks().iter().filter(|l| l.is_named()).count(),
        "Landmark index ready"
    );

    let handlers = RouteGuideHandlers::with_landmarks(index);
    start_server(settings.server_config(), handlers, shutdown_signal()).await?;

    info!("RouteGuide server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl-C, shutting down");
    } else {
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
}
