//! Coordinates of a city as reported by the weather service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;

/// Latitude or longitude outside the WGS84 range, or NaN
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("coordinates out of range: lat {latitude}, lon {longitude}")]
pub struct InvalidCoordinates {
    /// Rejected latitude
    pub latitude: f64,
    /// Rejected longitude
    pub longitude: f64,
}

/// WGS84 point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawLocation> for GeoLocation {
    type Error = InvalidCoordinates;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoLocation {
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` when either component is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if LATITUDE.contains(&latitude) && LONGITUDE.contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Centre of Budapest, used as the default map location
    #[must_use]
    pub const fn budapest() -> Self {
        Self {
            latitude: 47.4979,
            longitude: 19.0402,
        }
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
