//! gRPC server configuration and lifecycle management
//!
//! Handles listener binding, service registration, and graceful shutdown.

use routeguide_domain::LandmarkLookup;
use std::future::Future;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::handlers::RouteGuideHandlers;
use crate::proto::route_guide_server::RouteGuideServer;
use crate::service::{RouteGuideService, DEFAULT_STREAM_BUFFER};

/// Server lifecycle error
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listen address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Transport failure while serving
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server listen address
    pub addr: String,

    /// Server port
    pub port: u16,

    /// Capacity of outbound stream channels
    pub stream_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0".to_string(),
            port: 50051,
            stream_buffer: DEFAULT_STREAM_BUFFER,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the outbound stream channel capacity
    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity;
        self
    }

    /// Get the full server address
    pub fn full_address(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

/// Bind the configured address and serve until `shutdown` resolves
///
/// # Errors
/// Returns error if the address cannot be bound or the transport fails
pub async fn start_server<L, F>(
    config: ServerConfig,
    handlers: RouteGuideHandlers<L>,
    shutdown: F,
) -> Result<(), ServerError>
where
    L: LandmarkLookup + 'static,
    F: Future<Output = ()> + Send,
{
    let addr = config.full_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    let service = RouteGuideService::new(handlers).with_stream_buffer(config.stream_buffer);
    serve_with_listener(listener, service, shutdown).await
}

/// Serve on an already-bound listener until `shutdown` resolves
///
/// Useful for tests that bind port 0 and need the chosen address first.
pub async fn serve_with_listener<L, F>(
    listener: TcpListener,
    service: RouteGuideService<L>,
    shutdown: F,
) -> Result<(), ServerError>
where
    L: LandmarkLookup + 'static,
    F: Future<Output = ()> + Send,
{
    if let Ok(local) = listener.local_addr() {
        info!(addr = %local, "RouteGuide gRPC server listening");
    }

    Server::builder()
        .add_service(RouteGuideServer::new(service))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    info!("RouteGuide gRPC server stopped");
    Ok(())
}
