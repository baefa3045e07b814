//! Timezone value object

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the name is not in the IANA database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        name.parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidDateTime(format!("unknown timezone: {name}")))
    }

    /// Get the timezone name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// Convert a UTC instant into this timezone
    #[must_use]
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.0)
    }

    /// UTC timezone
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// Europe/Budapest timezone
    #[must_use]
    pub const fn budapest() -> Self {
        Self(Tz::Europe__Budapest)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::budapest()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.as_str().to_string()
    }
}
