//! Weather service port
//!
//! Defines the interface for weather data retrieval by city.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::value_objects::{CityName, GeoLocation, Humidity};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Pressure in hPa
    pub pressure: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Upstream condition text, e.g. "broken clouds"
    pub description: String,
    /// Where the upstream service located the city
    pub location: GeoLocation,
}

/// One forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Slot time (UTC)
    pub time: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Upstream condition text
    pub description: String,
    /// Rain over the slot in mm, 0 when not reported
    pub precipitation: f64,
}

/// Ordered forecast slots, typically 40 at 3-hour spacing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Slots in upstream order
    pub entries: Vec<ForecastEntry>,
}

impl Forecast {
    /// Create a forecast from entries
    #[must_use]
    pub const fn new(entries: Vec<ForecastEntry>) -> Self {
        Self { entries }
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Port for weather service operations
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city
    async fn get_current_weather(&self, city: &CityName)
    -> Result<WeatherSnapshot, ApplicationError>;

    /// Get the 3-hourly forecast for a city
    async fn get_forecast(&self, city: &CityName) -> Result<Forecast, ApplicationError>;
}
