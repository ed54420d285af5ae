//! Error types for the ranking engine

use thiserror::Error;

/// Okapi error type
#[derive(Error, Debug)]
pub enum Error {
    /// A BM25 parameter outside the range that keeps scores meaningful
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Malformed parameter configuration
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for okapi operations
pub type Result<T> = std::result::Result<T, Error>;
