//! Integration configuration: OpenWeatherMap.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use application::error::ApplicationError;

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// API key (sensitive - uses `SecretString`)
    ///
    /// Usually left unset here and resolved from the secret store.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl WeatherAppConfig {
    /// Client settings without the key
    #[must_use]
    pub fn client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// The API key, or a configuration error naming where to set it
    pub fn require_api_key(&self) -> Result<SecretString, ApplicationError> {
        self.api_key.clone().ok_or_else(|| {
            ApplicationError::Configuration(
                "OpenWeatherMap API key is not configured (set OPENWEATHER_API_KEY or weather.api_key)"
                    .to_string(),
            )
        })
    }
}
