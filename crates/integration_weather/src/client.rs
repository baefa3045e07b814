//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 `weather` and `forecast` endpoints.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeather, Endpoint, Forecast};

/// Units are always metric: °C and m/s
const UNITS: &str = "metric";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key was supplied
    #[error("OpenWeatherMap API key is not configured")]
    MissingApiKey,

    /// Connection failed or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code
        status: u16,
        /// Upstream `message` field, or the canonical reason
        message: String,
    },

    /// An expected JSON key is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Body is not JSON or a field has the wrong type
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data by city
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the raw JSON payload of one endpoint for a city
    async fn fetch_payload(
        &self,
        endpoint: Endpoint,
        city: &str,
    ) -> Result<serde_json::Value, WeatherError>;

    /// Get current weather for a city
    async fn get_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let payload = self.fetch_payload(Endpoint::Current, city).await?;
        CurrentWeather::from_payload(&payload)
    }

    /// Get the 3-hourly forecast for a city
    async fn get_forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let payload = self.fetch_payload(Endpoint::Forecast, city).await?;
        Forecast::from_payload(&payload)
    }
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl OpenWeatherMapClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the key is blank, or `Network` if the HTTP
    /// client cannot be initialized.
    pub fn new(config: WeatherConfig, api_key: SecretString) -> Result<Self, WeatherError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the endpoint URL, without query parameters
    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }

    /// Pull the upstream `message` out of an error body, if there is one
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    async fn fetch_payload(
        &self,
        endpoint: Endpoint,
        city: &str,
    ) -> Result<serde_json::Value, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.expose_secret()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Weather service returned an error");
            return Err(WeatherError::Http {
                status: status.as_u16(),
                message: Self::error_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::MalformedPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key".to_string())
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let result = OpenWeatherMapClient::new(
            WeatherConfig::default(),
            SecretString::from("  ".to_string()),
        );
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    }

    #[test]
    fn test_endpoint_url() {
        let config = WeatherConfig {
            base_url: "http://localhost:1234/data/2.5/".to_string(),
            ..Default::default()
        };
        let client = OpenWeatherMapClient::new(config, key()).expect("client creation");
        assert_eq!(
            client.endpoint_url(Endpoint::Current),
            "http://localhost:1234/data/2.5/weather"
        );
        assert_eq!(
            client.endpoint_url(Endpoint::Forecast),
            "http://localhost:1234/data/2.5/forecast"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = OpenWeatherMapClient::new(WeatherConfig::default(), key()).expect("client");
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-key"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_error_message_prefers_upstream_text() {
        let msg = OpenWeatherMapClient::error_message(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"cod":"404","message":"city not found"}"#,
        );
        assert_eq!(msg, "city not found");

        let msg = OpenWeatherMapClient::error_message(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>",
        );
        assert_eq!(msg, "Internal Server Error");
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::Http {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: Invalid API key");

        let err = WeatherError::MissingField("main.temp".to_string());
        assert_eq!(err.to_string(), "Missing field: main.temp");
    }

    #[test]
    fn test_config_serialization() {
        let json = r#"{"base_url":"https://custom.api.com"}"#;
        let config: WeatherConfig = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout_secs, 30);
    }
}
