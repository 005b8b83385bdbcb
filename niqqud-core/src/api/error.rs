//! Error types for the API

use thiserror::Error;

use crate::error::ConfigError;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Script rules could not be loaded
    #[error("Rules error: {0}")]
    Rules(#[from] ConfigError),

    /// Record input could not be parsed
    #[error("Invalid record at {location}: {message}")]
    InvalidRecord {
        /// Line number (JSONL) or "input" (JSON array)
        location: String,
        /// Parser message
        message: String,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
