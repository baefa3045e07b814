//! Cloudiness labels derived from upstream sky descriptions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky condition, translated from the upstream free-text description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cloudiness {
    /// "clear sky"
    ClearSky,
    /// "few clouds"
    FewClouds,
    /// "scattered clouds"
    ScatteredClouds,
    /// "broken clouds"
    BrokenClouds,
    /// "overcast clouds"
    OvercastClouds,
    /// Anything else
    Unknown,
}

impl Cloudiness {
    /// Exact-match lookup of an upstream description
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        match description {
            "clear sky" => Self::ClearSky,
            "few clouds" => Self::FewClouds,
            "scattered clouds" => Self::ScatteredClouds,
            "broken clouds" => Self::BrokenClouds,
            "overcast clouds" => Self::OvercastClouds,
            _ => Self::Unknown,
        }
    }

    /// Hungarian display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ClearSky => "Derült égbolt",
            Self::FewClouds => "Gyengén felhős",
            Self::ScatteredClouds => "Közepesen felhős",
            Self::BrokenClouds => "Erősen felhős",
            Self::OvercastClouds => "Borult",
            Self::Unknown => "Ismeretlen",
        }
    }
}

impl fmt::Display for Cloudiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an upstream description. Never fails.
#[must_use]
pub fn classify_cloudiness(description: &str) -> Cloudiness {
    Cloudiness::from_description(description)
}
