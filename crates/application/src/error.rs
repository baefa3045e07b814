//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Why fetching weather data failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection failed or timed out
    #[error("network error: {0}")]
    Network(String),

    /// Upstream answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code
        status: u16,
        /// Upstream message
        message: String,
    },

    /// Payload is not valid JSON or lacks a required field
    #[error("missing field: {0}")]
    MissingField(String),
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Weather data could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
