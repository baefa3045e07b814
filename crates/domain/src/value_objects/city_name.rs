//! City name value object
//!
//! Normalizes free-text user input into the casing the weather service
//! expects. This is best-effort: a well-formed name is no guarantee that the
//! city exists upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A trimmed, capitalized city name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// City shown when the user gives no input
    pub const DEFAULT: &'static str = "Budapest";

    /// Create a normalized city name
    ///
    /// The first character is upper-cased and the rest lower-cased, so
    /// `"bUDAPEST"` becomes `"Budapest"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the input is blank.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::ValidationError(
                "city name must not be empty".to_string(),
            ));
        };

        let normalized: String = first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect();
        Ok(Self(normalized))
    }

    /// Get the normalized name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CityName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.0
    }
}
