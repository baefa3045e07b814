//! Beaufort wind categories
//!
//! Maps a wind speed in m/s onto the Hungarian Beaufort wording used by the
//! dashboard.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{BeaufortCategory, classify_wind};
//!
//! assert_eq!(classify_wind(1.5), BeaufortCategory::Light);
//! assert_eq!(classify_wind(3.4).label(), "Mérsékelt");
//! assert_eq!(classify_wind(-1.0), BeaufortCategory::Unknown);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named wind-strength class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeaufortCategory {
    /// Teljes szélcsend
    Calm,
    /// Gyenge
    Light,
    /// Mérsékelt
    Moderate,
    /// Élénk
    Fresh,
    /// Erős
    Strong,
    /// Viharos
    Stormy,
    /// Erősen viharos
    SevereStorm,
    /// Szélviharos
    Gale,
    /// No interval matched (negative or NaN input)
    Unknown,
}

impl BeaufortCategory {
    /// Hungarian display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Teljes szélcsend",
            Self::Light => "Gyenge",
            Self::Moderate => "Mérsékelt",
            Self::Fresh => "Élénk",
            Self::Strong => "Erős",
            Self::Stormy => "Viharos",
            Self::SevereStorm => "Erősen viharos",
            Self::Gale => "Szélviharos",
            Self::Unknown => "Ismeretlen",
        }
    }

    /// Whether this is the fallback category
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for BeaufortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the Beaufort table, bounds in m/s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeaufortBand {
    /// Lower bound as printed in the table
    pub lower: f64,
    /// Upper bound (inclusive)
    pub upper: f64,
    /// Category for speeds inside the band
    pub category: BeaufortCategory,
}

const fn band(lower: f64, upper: f64, category: BeaufortCategory) -> BeaufortBand {
    BeaufortBand {
        lower,
        upper,
        category,
    }
}

/// The Beaufort table in ascending order.
///
/// Adjacent rows leave a 0.1 m/s gap between one upper bound and the next
/// lower bound. A speed inside such a gap belongs to the following row.
pub const BEAUFORT_SCALE: [BeaufortBand; 13] = [
    band(0.0, 0.3, BeaufortCategory::Calm),
    band(0.3, 1.5, BeaufortCategory::Light),
    band(1.6, 3.3, BeaufortCategory::Light),
    band(3.4, 5.5, BeaufortCategory::Moderate),
    band(5.6, 7.9, BeaufortCategory::Moderate),
    band(8.0, 10.7, BeaufortCategory::Fresh),
    band(10.8, 13.8, BeaufortCategory::Strong),
    band(13.9, 17.1, BeaufortCategory::Strong),
    band(17.2, 20.7, BeaufortCategory::Stormy),
    band(20.8, 24.4, BeaufortCategory::Stormy),
    band(24.5, 28.4, BeaufortCategory::SevereStorm),
    band(28.5, 32.6, BeaufortCategory::Gale),
    band(32.7, f64::INFINITY, BeaufortCategory::Gale),
];

/// Classify a wind speed (m/s) into its Beaufort category.
///
/// First match wins, scanning [`BEAUFORT_SCALE`] in ascending order. A band
/// matches when the speed is at most its upper bound. Because the scan is
/// ascending this is the same as `lower <= speed <= upper` for speeds on a
/// printed band, and it sends speeds that fall between two printed bands to
/// the higher one.
#[must_use]
pub fn classify_wind(speed: f64) -> BeaufortCategory {
    if speed.is_nan() || speed < 0.0 {
        return BeaufortCategory::Unknown;
    }

    BEAUFORT_SCALE
        .iter()
        .find(|band| speed <= band.upper)
        .map_or(BeaufortCategory::Unknown, |band| band.category)
}
