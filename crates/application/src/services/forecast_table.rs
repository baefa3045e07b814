//! Forecast transformation
//!
//! Turns a [`Forecast`] into either a per-slot table with derived labels or
//! morning/afternoon temperature averages. Local hours are taken in the
//! dashboard timezone.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, FixedOffset, Timelike};
use domain::value_objects::{
    BeaufortCategory, Cloudiness, Humidity, Timezone, WindDirection, classify_cloudiness,
    classify_direction, classify_wind,
};
use serde::{Deserialize, Serialize};

use crate::ports::{Forecast, ForecastEntry};

/// Local hours counted as morning, both ends inclusive
///
/// Hour 12 is in both windows: a noon slot counts towards the morning and
/// the afternoon average.
pub const MORNING_HOURS: RangeInclusive<u32> = 6..=12;

/// Local hours counted as afternoon, both ends inclusive
pub const AFTERNOON_HOURS: RangeInclusive<u32> = 12..=18;

/// Which forecast rendering to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastView {
    /// Morning and afternoon mean temperature
    Averages,
    /// One row per forecast slot
    #[default]
    Table,
}

impl ForecastView {
    /// Configuration name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Averages => "averages",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ForecastView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Slot time in the dashboard timezone
    pub local_time: DateTime<FixedOffset>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction with compass label
    pub wind_direction: WindDirection,
    /// Hungarian sky label
    pub cloudiness: Cloudiness,
    /// Rain in mm
    pub precipitation: f64,
    /// Beaufort category of the slot's wind
    pub beaufort: BeaufortCategory,
    /// Whether the slot has the same Beaufort category as the current wind
    pub matches_current_wind: bool,
}

impl ForecastRow {
    fn from_entry(entry: &ForecastEntry, current_wind: BeaufortCategory, tz: Timezone) -> Self {
        let beaufort = classify_wind(entry.wind_speed);
        Self {
            local_time: tz.localize(entry.time).fixed_offset(),
            temperature: entry.temperature,
            humidity: entry.humidity,
            wind_speed: entry.wind_speed,
            wind_direction: classify_direction(entry.wind_direction),
            cloudiness: classify_cloudiness(&entry.description),
            precipitation: entry.precipitation,
            beaufort,
            matches_current_wind: beaufort == current_wind,
        }
    }
}

/// Build the forecast table, one row per slot in forecast order
#[must_use]
pub fn build_table(
    forecast: &Forecast,
    current_wind: BeaufortCategory,
    tz: Timezone,
) -> Vec<ForecastRow> {
    forecast
        .entries
        .iter()
        .map(|entry| ForecastRow::from_entry(entry, current_wind, tz))
        .collect()
}

/// Mean temperatures of the two daytime windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureAverages {
    /// Mean over [`MORNING_HOURS`], `None` when no slot falls in the window
    pub morning: Option<f64>,
    /// Mean over [`AFTERNOON_HOURS`], `None` when no slot falls in the window
    pub afternoon: Option<f64>,
}

/// Average the forecast temperatures per daytime window
#[must_use]
pub fn compute_averages(forecast: &Forecast, tz: Timezone) -> TemperatureAverages {
    TemperatureAverages {
        morning: window_mean(forecast, tz, &MORNING_HOURS),
        afternoon: window_mean(forecast, tz, &AFTERNOON_HOURS),
    }
}

#[allow(clippy::cast_precision_loss)]
fn window_mean(forecast: &Forecast, tz: Timezone, hours: &RangeInclusive<u32>) -> Option<f64> {
    let (sum, count) = forecast
        .entries
        .iter()
        .filter(|entry| hours.contains(&tz.localize(entry.time).hour()))
        .fold((0.0, 0usize), |(sum, count), entry| {
            (sum + entry.temperature, count + 1)
        });

    (count > 0).then(|| sum / count as f64)
}

/// The forecast part of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ForecastSection {
    /// Morning/afternoon averages
    Averages(TemperatureAverages),
    /// Full table
    Table {
        /// Rows in forecast order
        rows: Vec<ForecastRow>,
    },
}

impl ForecastSection {
    /// Build the section for the selected view
    #[must_use]
    pub fn build(
        view: ForecastView,
        forecast: &Forecast,
        current_wind: BeaufortCategory,
        tz: Timezone,
    ) -> Self {
        match view {
            ForecastView::Averages => Self::Averages(compute_averages(forecast, tz)),
            ForecastView::Table => Self::Table {
                rows: build_table(forecast, current_wind, tz),
            },
        }
    }
}
