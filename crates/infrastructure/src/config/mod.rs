//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenWeatherMap endpoint, timeout and key
//! - `cache`: response cache TTL
//! - `dashboard`: default city, forecast view and timezone
//!
//! Sources are layered: built-in defaults, an optional `config.toml`, then
//! `ENAPLO_*` environment variables with `__` between nested keys
//! (e.g. `ENAPLO_CACHE__TTL_SECS=600`).

mod cache;
mod dashboard;
mod integrations;

use std::path::Path;

use application::error::ApplicationError;
use application::ports::SecretStorePort;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use cache::CacheConfig;
pub use dashboard::DashboardConfig;
pub use integrations::WeatherAppConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ENAPLO";

/// Secret store key of the OpenWeatherMap API key
pub const WEATHER_API_KEY_SECRET: &str = "openweather/api_key";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from environment and `config.toml`, or from `path`
    /// instead of `config.toml` when given
    ///
    /// An explicitly named file must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, None)
    }

    fn build(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", "https://api.openweathermap.org/data/2.5")?
            .set_default("cache.ttl_secs", 86_400)?
            .set_default("dashboard.default_city", "Budapest")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., ENAPLO_DASHBOARD__VIEW)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Resolve secrets from a secret store into the config
    ///
    /// Only populates fields that are currently empty. A key set in
    /// `config.toml` or `ENAPLO_WEATHER__API_KEY` wins over the store.
    /// A missing secret is logged, not returned; callers fail fast through
    /// [`WeatherAppConfig::require_api_key`].
    pub async fn resolve_secrets(
        &mut self,
        store: &dyn SecretStorePort,
    ) -> Result<(), ApplicationError> {
        let configured = self
            .weather
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());
        if configured {
            debug!("Weather API key taken from configuration");
            return Ok(());
        }

        match store.get_secret(WEATHER_API_KEY_SECRET).await {
            Ok(value) if !value.trim().is_empty() => {
                self.weather.api_key = Some(SecretString::from(value));
                info!("Loaded weather.api_key from secret store");
            },
            Ok(_) => warn!(key = WEATHER_API_KEY_SECRET, "Weather API key secret is empty"),
            Err(e) => warn!(key = WEATHER_API_KEY_SECRET, error = %e, "Failed to resolve weather API key"),
        }

        Ok(())
    }
}
