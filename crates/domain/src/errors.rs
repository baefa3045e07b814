//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Date/time or timezone error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}
