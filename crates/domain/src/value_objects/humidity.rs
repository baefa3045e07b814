//! Relative humidity reading
//!
//! ```
//! use domain::value_objects::Humidity;
//!
//! assert_eq!(Humidity::clamped(56).to_string(), "56%");
//! assert_eq!(Humidity::clamped(140).value(), 100);
//! assert!(Humidity::new(101).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Humidity above 100%
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("humidity {0}% exceeds 100%")]
pub struct InvalidHumidity(pub u8);

/// Relative humidity in whole percent, never above 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    /// Saturation
    pub const MAX: u8 = 100;

    /// Strict constructor
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` above [`Self::MAX`].
    pub const fn new(percent: u8) -> Result<Self, InvalidHumidity> {
        if percent > Self::MAX {
            return Err(InvalidHumidity(percent));
        }
        Ok(Self(percent))
    }

    /// Lenient constructor for upstream readings; values above 100 saturate
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Humidity> for u8 {
    fn from(humidity: Humidity) -> Self {
        humidity.0
    }
}
