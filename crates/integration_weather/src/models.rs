//! Weather data models
//!
//! Types for the OpenWeatherMap `weather` and `forecast` payloads. Raw
//! response types keep every field optional so that a missing key is
//! reported by name instead of as a generic decode failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Upstream endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Current conditions (`/weather`)
    Current,
    /// 5 day / 3 hour forecast (`/forecast`)
    Forecast,
}

impl Endpoint {
    /// URL path segment
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Current => "weather",
            Self::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Sea-level pressure in hPa
    pub pressure: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Upstream condition description, e.g. "scattered clouds"
    pub description: String,
    /// Latitude of the matched city
    pub latitude: f64,
    /// Longitude of the matched city
    pub longitude: f64,
}

impl CurrentWeather {
    /// Extract current conditions from a `/weather` payload
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming the first absent key, or
    /// `MalformedPayload` if a present key has the wrong type.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, WeatherError> {
        let raw = CurrentResponse::deserialize(payload)
            .map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;

        let main = require(raw.main, "main")?;
        let wind = require(raw.wind, "wind")?;
        let coord = require(raw.coord, "coord")?;

        Ok(Self {
            temperature: require(main.temp, "main.temp")?,
            humidity: require(main.humidity, "main.humidity")?,
            pressure: require(main.pressure, "main.pressure")?,
            wind_speed: require(wind.speed, "wind.speed")?,
            wind_direction: require(wind.deg, "wind.deg")?,
            description: first_description(raw.weather, "weather[0].description")?,
            latitude: require(coord.lat, "coord.lat")?,
            longitude: require(coord.lon, "coord.lon")?,
        })
    }
}

/// One 3-hour forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Slot time (UTC)
    pub time: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Upstream condition description
    pub description: String,
    /// Rain volume for the last 3 hours in mm, 0 when not reported
    pub precipitation: f64,
}

/// Ordered sequence of forecast slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Slots in upstream order
    pub entries: Vec<ForecastEntry>,
}

impl Forecast {
    /// Extract the forecast list from a `/forecast` payload
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming the first absent key (with the list
    /// index), or `MalformedPayload` for wrongly typed values and
    /// out-of-range timestamps.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, WeatherError> {
        let raw = ForecastResponse::deserialize(payload)
            .map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;

        let list = require(raw.list, "list")?;
        let entries = list
            .into_iter()
            .enumerate()
            .map(|(i, item)| ForecastEntry::from_raw(i, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the forecast has no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ForecastEntry {
    fn from_raw(index: usize, raw: RawForecastItem) -> Result<Self, WeatherError> {
        let field = |name: &str| format!("list[{index}].{name}");

        let dt = require_named(raw.dt, || field("dt"))?;
        let time = DateTime::from_timestamp(dt, 0).ok_or_else(|| {
            WeatherError::MalformedPayload(format!("{} out of range: {dt}", field("dt")))
        })?;
        let main = require_named(raw.main, || field("main"))?;
        let wind = require_named(raw.wind, || field("wind"))?;

        Ok(Self {
            time,
            temperature: require_named(main.temp, || field("main.temp"))?,
            humidity: require_named(main.humidity, || field("main.humidity"))?,
            wind_speed: require_named(wind.speed, || field("wind.speed"))?,
            wind_direction: require_named(wind.deg, || field("wind.deg"))?,
            description: first_description(raw.weather, &field("weather[0].description"))?,
            precipitation: raw.rain.and_then(|r| r.three_hours).unwrap_or(0.0),
        })
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, WeatherError> {
    value.ok_or_else(|| WeatherError::MissingField(field.to_string()))
}

fn require_named<T>(value: Option<T>, field: impl FnOnce() -> String) -> Result<T, WeatherError> {
    value.ok_or_else(|| WeatherError::MissingField(field()))
}

fn first_description(
    conditions: Option<Vec<RawCondition>>,
    field: &str,
) -> Result<String, WeatherError> {
    conditions
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.description)
        .ok_or_else(|| WeatherError::MissingField(field.to_string()))
}

/// Raw `/weather` response
#[derive(Debug, Clone, Deserialize)]
struct CurrentResponse {
    main: Option<RawMain>,
    wind: Option<RawWind>,
    weather: Option<Vec<RawCondition>>,
    coord: Option<RawCoord>,
}

/// Raw `/forecast` response
#[derive(Debug, Clone, Deserialize)]
struct ForecastResponse {
    list: Option<Vec<RawForecastItem>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawForecastItem {
    dt: Option<i64>,
    main: Option<RawMain>,
    wind: Option<RawWind>,
    weather: Option<Vec<RawCondition>>,
    rain: Option<RawRain>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawMain {
    temp: Option<f64>,
    humidity: Option<u8>,
    pressure: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawWind {
    speed: Option<f64>,
    deg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCondition {
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCoord {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawRain {
    #[serde(rename = "3h")]
    three_hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_payload() -> serde_json::Value {
        json!({
            "coord": { "lon": 19.0399, "lat": 47.498 },
            "weather": [{ "id": 802, "main": "Clouds", "description": "scattered clouds" }],
            "main": { "temp": 21.4, "feels_like": 21.0, "pressure": 1016, "humidity": 56 },
            "wind": { "speed": 3.6, "deg": 202 },
            "name": "Budapest",
            "cod": 200
        })
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::Current.path(), "weather");
        assert_eq!(Endpoint::Forecast.to_string(), "forecast");
    }

    #[test]
    fn parses_current_payload() {
        let current = CurrentWeather::from_payload(&current_payload()).expect("should parse");
        assert!((current.temperature - 21.4).abs() < f64::EPSILON);
        assert_eq!(current.humidity, 56);
        assert!((current.pressure - 1016.0).abs() < f64::EPSILON);
        assert!((current.wind_direction - 202.0).abs() < f64::EPSILON);
        assert_eq!(current.description, "scattered clouds");
        assert!((current.latitude - 47.498).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_main_is_reported_by_name() {
        let mut payload = current_payload();
        payload.as_object_mut().unwrap().remove("main");
        let err = CurrentWeather::from_payload(&payload).unwrap_err();
        assert!(matches!(err, WeatherError::MissingField(ref f) if f == "main"));
    }

    #[test]
    fn missing_nested_field_is_reported_by_path() {
        let mut payload = current_payload();
        payload["wind"].as_object_mut().unwrap().remove("deg");
        let err = CurrentWeather::from_payload(&payload).unwrap_err();
        assert!(matches!(err, WeatherError::MissingField(ref f) if f == "wind.deg"));
    }

    #[test]
    fn empty_weather_array_is_missing_description() {
        let mut payload = current_payload();
        payload["weather"] = json!([]);
        let err = CurrentWeather::from_payload(&payload).unwrap_err();
        assert!(matches!(err, WeatherError::MissingField(ref f) if f == "weather[0].description"));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let mut payload = current_payload();
        payload["main"]["temp"] = json!("warm");
        let err = CurrentWeather::from_payload(&payload).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedPayload(_)));
    }

    #[test]
    fn parses_forecast_with_and_without_rain() {
        let payload = json!({
            "cod": "200",
            "cnt": 2,
            "list": [
                {
                    "dt": 1_705_320_000,
                    "main": { "temp": 4.5, "humidity": 80 },
                    "wind": { "speed": 2.1, "deg": 90 },
                    "weather": [{ "description": "light rain" }],
                    "rain": { "3h": 0.42 }
                },
                {
                    "dt": 1_705_330_800,
                    "main": { "temp": 6.0, "humidity": 70 },
                    "wind": { "speed": 4.0, "deg": 180 },
                    "weather": [{ "description": "clear sky" }]
                }
            ]
        });

        let forecast = Forecast::from_payload(&payload).expect("should parse");
        assert_eq!(forecast.len(), 2);
        assert!((forecast.entries[0].precipitation - 0.42).abs() < f64::EPSILON);
        assert!(forecast.entries[1].precipitation.abs() < f64::EPSILON);
        assert_eq!(forecast.entries[0].time.timestamp(), 1_705_320_000);
    }

    #[test]
    fn rain_without_three_hour_key_defaults_to_zero() {
        let payload = json!({
            "list": [{
                "dt": 1_705_320_000,
                "main": { "temp": 4.5, "humidity": 80 },
                "wind": { "speed": 2.1, "deg": 90 },
                "weather": [{ "description": "light rain" }],
                "rain": { "1h": 0.2 }
            }]
        });
        let forecast = Forecast::from_payload(&payload).expect("should parse");
        assert!(forecast.entries[0].precipitation.abs() < f64::EPSILON);
    }

    #[test]
    fn forecast_missing_field_carries_index() {
        let payload = json!({
            "list": [
                { "dt": 1, "main": { "temp": 1.0, "humidity": 1 }, "wind": { "speed": 1.0, "deg": 1 }, "weather": [{ "description": "x" }] },
                { "dt": 2, "main": { "humidity": 1 }, "wind": { "speed": 1.0, "deg": 1 }, "weather": [{ "description": "x" }] }
            ]
        });
        let err = Forecast::from_payload(&payload).unwrap_err();
        assert!(matches!(err, WeatherError::MissingField(ref f) if f == "list[1].main.temp"));
    }

    #[test]
    fn forecast_without_list_is_missing_field() {
        let err = Forecast::from_payload(&json!({ "cod": "404" })).unwrap_err();
        assert!(matches!(err, WeatherError::MissingField(ref f) if f == "list"));
    }

    #[test]
    fn empty_list_is_valid() {
        let forecast = Forecast::from_payload(&json!({ "list": [] })).expect("should parse");
        assert!(forecast.is_empty());
    }
}
