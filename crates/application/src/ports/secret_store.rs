//! Port for secret storage and retrieval
//!
//! Secrets such as the weather API key are looked up by a path-like key
//! (e.g. "openweather/api_key"). The backend decides how the key maps to
//! its own naming.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key/path
    ///
    /// Returns `ApplicationError::Configuration` if the secret is absent.
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;
}
