//! Dashboard presentation defaults.

use application::services::ForecastView;
use domain::value_objects::{CityName, Timezone};
use serde::{Deserialize, Serialize};

/// Dashboard defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// City shown when none is given on the command line
    #[serde(default)]
    pub default_city: CityName,

    /// Forecast view shown when none is selected
    #[serde(default)]
    pub view: ForecastView,

    /// Timezone used for forecast hours (default: Europe/Budapest)
    #[serde(default)]
    pub timezone: Timezone,
}
