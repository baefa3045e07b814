//! Dashboard service
//!
//! Runs one dashboard interaction: fetch current conditions, fetch the
//! forecast, classify, and build the selected forecast view. Any failure
//! aborts the whole interaction.

use std::sync::Arc;

use domain::value_objects::{
    BeaufortCategory, CityName, Cloudiness, Timezone, WindDirection, classify_cloudiness,
    classify_direction, classify_wind,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{WeatherPort, WeatherSnapshot};
use crate::services::forecast_table::{ForecastSection, ForecastView};

/// Current conditions together with their derived labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Raw snapshot
    pub snapshot: WeatherSnapshot,
    /// Beaufort category of the current wind
    pub beaufort: BeaufortCategory,
    /// Wind direction with compass label
    pub wind_direction: WindDirection,
    /// Hungarian sky label
    pub cloudiness: Cloudiness,
}

impl CurrentConditions {
    /// Classify a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: WeatherSnapshot) -> Self {
        Self {
            beaufort: classify_wind(snapshot.wind_speed),
            wind_direction: classify_direction(snapshot.wind_direction),
            cloudiness: classify_cloudiness(&snapshot.description),
            snapshot,
        }
    }
}

/// Everything the presenter renders for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Normalized city name
    pub city: CityName,
    /// Timezone used for forecast hours
    pub timezone: Timezone,
    /// Current conditions
    pub current: CurrentConditions,
    /// Forecast in the selected view
    pub forecast: ForecastSection,
}

/// Builds dashboards from a weather port
pub struct DashboardService {
    weather: Arc<dyn WeatherPort>,
    timezone: Timezone,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a service using the default timezone (Europe/Budapest)
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            timezone: Timezone::default(),
        }
    }

    /// Use a different timezone for forecast hours
    #[must_use]
    pub const fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Timezone used for forecast hours
    #[must_use]
    pub const fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// Build the dashboard for a raw, user-typed city name
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` for a blank name, otherwise
    /// whatever [`Self::build`] returns.
    pub async fn build_for(
        &self,
        raw_city: &str,
        view: ForecastView,
    ) -> Result<Dashboard, ApplicationError> {
        let city = CityName::new(raw_city)?;
        self.build(&city, view).await
    }

    /// Build the dashboard for a city
    ///
    /// Current conditions are fetched first; the forecast is only requested
    /// once they succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error.
    #[instrument(skip(self), fields(city = %city, view = %view))]
    pub async fn build(
        &self,
        city: &CityName,
        view: ForecastView,
    ) -> Result<Dashboard, ApplicationError> {
        let snapshot = self.weather.get_current_weather(city).await?;
        let current = CurrentConditions::from_snapshot(snapshot);
        debug!(beaufort = %current.beaufort, "Classified current wind");

        let forecast = self.weather.get_forecast(city).await?;
        let section = ForecastSection::build(view, &forecast, current.beaufort, self.timezone);

        info!(slots = forecast.len(), "Dashboard built");

        Ok(Dashboard {
            city: city.clone(),
            timezone: self.timezone,
            current,
            forecast: section,
        })
    }
}
