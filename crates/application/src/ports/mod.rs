//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod clock;
mod secret_store;
mod weather_port;

pub use cache_port::{CachePort, CachePortExt, CacheStats, ttl};
#[cfg(test)]
pub use clock::MockClock;
pub use clock::Clock;
pub use secret_store::SecretStorePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{Forecast, ForecastEntry, WeatherPort, WeatherSnapshot};
