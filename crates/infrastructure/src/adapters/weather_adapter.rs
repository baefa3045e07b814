//! Weather adapter - Implements WeatherPort using integration_weather
//!
//! Sits between the dashboard and the OpenWeatherMap client. Raw payloads
//! are cached per (city, endpoint) once they have been parsed and
//! validated, so a failed, malformed or out-of-range response is never
//! served from the cache.

use std::sync::Arc;
use std::time::Duration;

use application::error::{ApplicationError, FetchError};
use application::ports::{
    CachePort, CachePortExt, Forecast, ForecastEntry, WeatherPort, WeatherSnapshot, ttl,
};
use async_trait::async_trait;
use domain::value_objects::{CityName, GeoLocation, Humidity};
use integration_weather::{
    CurrentWeather, Endpoint, Forecast as IntegrationForecast, OpenWeatherMapClient,
    WeatherClient, WeatherConfig, WeatherError,
};
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use crate::cache::weather_cache_key;

/// Adapter for the OpenWeatherMap API with an optional response cache
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
    cache: Option<Arc<dyn CachePort>>,
    cache_ttl: Duration,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("cache", &self.cache)
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Wrap an existing client, without caching
    #[must_use]
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self {
            client,
            cache: None,
            cache_ttl: ttl::DAY,
        }
    }

    /// Create an OpenWeatherMap-backed adapter
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is blank or
    /// the HTTP client cannot be initialized.
    pub fn with_config(config: WeatherConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config, api_key).map_err(|e| match e {
            WeatherError::MissingApiKey => ApplicationError::Configuration(e.to_string()),
            other => ApplicationError::Configuration(format!(
                "Failed to initialize weather client: {other}"
            )),
        })?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Cache parsed payloads in `cache` for `ttl`
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn CachePort>, ttl: Duration) -> Self {
        self.cache = Some(cache);
        self.cache_ttl = ttl;
        self
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::MissingApiKey => ApplicationError::Configuration(err.to_string()),
            WeatherError::Network(e) => FetchError::Network(e).into(),
            WeatherError::Http { status, message } => FetchError::Http { status, message }.into(),
            WeatherError::MissingField(field) => FetchError::MissingField(field).into(),
            WeatherError::MalformedPayload(e) => {
                FetchError::MissingField(format!("malformed payload: {e}")).into()
            },
        }
    }

    /// Fetch a payload, from the cache when possible, and convert it
    ///
    /// The raw payload is only written to the cache after `convert` accepted
    /// it, so anything `convert` rejects is fetched again next time.
    async fn fetch_converted<T>(
        &self,
        endpoint: Endpoint,
        city: &CityName,
        convert: fn(&serde_json::Value) -> Result<T, ApplicationError>,
    ) -> Result<T, ApplicationError> {
        let key = weather_cache_key(city.as_str(), endpoint.path());

        if let Some(cache) = &self.cache {
            match cache.get::<serde_json::Value>(&key).await {
                Ok(Some(payload)) => {
                    debug!(endpoint = %endpoint, "Serving weather payload from cache");
                    return convert(&payload);
                },
                Ok(None) => {},
                Err(e) => warn!(error = %e, "Weather cache read failed"),
            }
        }

        let payload = self
            .client
            .fetch_payload(endpoint, city.as_str())
            .await
            .map_err(Self::map_error)?;
        let converted = convert(&payload)?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(&key, &payload, self.cache_ttl).await {
                warn!(error = %e, "Weather cache write failed");
            }
        }

        Ok(converted)
    }

    /// Parse and validate a current-weather payload
    fn convert_current(payload: &serde_json::Value) -> Result<WeatherSnapshot, ApplicationError> {
        let current = CurrentWeather::from_payload(payload).map_err(Self::map_error)?;
        Self::map_current(current)
    }

    /// Parse a forecast payload
    fn convert_forecast(payload: &serde_json::Value) -> Result<Forecast, ApplicationError> {
        IntegrationForecast::from_payload(payload)
            .map(Self::map_forecast)
            .map_err(Self::map_error)
    }

    /// Convert integration current weather to a snapshot
    fn map_current(current: CurrentWeather) -> Result<WeatherSnapshot, ApplicationError> {
        let location = GeoLocation::new(current.latitude, current.longitude)
            .map_err(|e| FetchError::MissingField(format!("coord: {e}")))?;

        Ok(WeatherSnapshot {
            temperature: current.temperature,
            humidity: Humidity::clamped(current.humidity),
            pressure: current.pressure,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            description: current.description,
            location,
        })
    }

    /// Convert the integration forecast to the port forecast
    fn map_forecast(forecast: IntegrationForecast) -> Forecast {
        Forecast::new(
            forecast
                .entries
                .into_iter()
                .map(|entry| ForecastEntry {
                    time: entry.time,
                    temperature: entry.temperature,
                    humidity: Humidity::clamped(entry.humidity),
                    wind_speed: entry.wind_speed,
                    wind_direction: entry.wind_direction,
                    description: entry.description,
                    precipitation: entry.precipitation,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn get_current_weather(
        &self,
        city: &CityName,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self
            .fetch_converted(Endpoint::Current, city, Self::convert_current)
            .await;

        match &result {
            Ok(snapshot) => {
                debug!(
                    temperature = snapshot.temperature,
                    description = %snapshot.description,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn get_forecast(&self, city: &CityName) -> Result<Forecast, ApplicationError> {
        let result = self
            .fetch_converted(Endpoint::Forecast, city, Self::convert_forecast)
            .await;

        match &result {
            Ok(forecast) => debug!(slots = forecast.len(), "Retrieved forecast"),
            Err(e) => debug!(error = %e, "Failed to get forecast"),
        }

        result
    }
}
