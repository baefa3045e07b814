//! Value Objects - Immutable, identity-less domain primitives

mod beaufort;
mod city_name;
mod cloudiness;
mod geo_location;
mod humidity;
mod timezone;
mod wind_direction;

pub use beaufort::{BEAUFORT_SCALE, BeaufortBand, BeaufortCategory, classify_wind};
pub use city_name::CityName;
pub use cloudiness::{Cloudiness, classify_cloudiness};
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use timezone::Timezone;
pub use wind_direction::{DIRECTIONS, WindDirection, classify_direction};
