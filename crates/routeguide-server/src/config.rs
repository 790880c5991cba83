//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, dataset location,
//! log filter and stream buffering. Every field has a default, so an absent
//! file or an empty one is valid.

use crate::cli::Cli;
use routeguide_grpc::ServerConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Server settings loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    /// Bind address (e.g., "0.0.0.0")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 50051)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Landmark dataset path
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Capacity of outbound stream channels
    #[serde(default = "default_stream_buffer")]
    pub stream_buffer: usize,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_bind_port() -> u16 {
    50051
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/route_guide_db.json")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_stream_buffer() -> usize {
    32
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            dataset_path: default_dataset_path(),
            log_filter: default_log_filter(),
            stream_buffer: default_stream_buffer(),
        }
    }
}

impl ServerSettings {
    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings: ServerSettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Resolve settings from the optional config file, then apply CLI overrides
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(addr) = &cli.bind_address {
            settings.bind_address = addr.clone();
        }
        if let Some(port) = cli.port {
            settings.bind_port = port;
        }
        if let Some(dataset) = &cli.dataset {
            settings.dataset_path = dataset.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        if self.stream_buffer == 0 {
            return Err(ConfigError::Invalid("stream_buffer must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Transport configuration derived from these settings
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.bind_address.clone(), self.bind_port)
            .with_stream_buffer(self.stream_buffer)
    }
}
