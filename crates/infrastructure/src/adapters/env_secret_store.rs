//! Secret store over process environment variables
//!
//! `openweather/api_key` is read from `OPENWEATHER_API_KEY`.

use std::env::{self, VarError};

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use tracing::{debug, instrument};

type Lookup = fn(&str) -> Result<String, VarError>;

/// Environment-backed [`SecretStorePort`]
#[derive(Debug, Clone)]
pub struct EnvSecretStore {
    lookup: Lookup,
}

impl Default for EnvSecretStore {
    fn default() -> Self {
        Self {
            lookup: |name| env::var(name),
        }
    }
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Secret key to variable name: `/` and `-` become `_`, then uppercase
    fn env_var_name(key: &str) -> String {
        key.replace(['/', '-'], "_").to_uppercase()
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let var = Self::env_var_name(key);

        match (self.lookup)(&var) {
            Ok(value) => {
                debug!(env_var = %var, "Secret read from environment");
                Ok(value)
            },
            Err(VarError::NotPresent) => Err(ApplicationError::Configuration(format!(
                "Secret not found: {key} (set {var})"
            ))),
            Err(VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "{var} is not valid UTF-8"
            ))),
        }
    }
}
