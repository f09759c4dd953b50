//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}
