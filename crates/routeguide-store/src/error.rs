//! Error types for storage operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading landmark data
#[derive(Error, Debug)]
pub enum StoreError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Dataset contents are not valid
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
