//! Error types for shoptrack.

use std::io;
use thiserror::Error;

/// Result type alias for shoptrack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shoptrack operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
