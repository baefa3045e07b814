//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! adapter, the TTL response cache, clocks, the environment secret store,
//! and layered configuration loading.

pub mod adapters;
pub mod cache;
pub mod config;

pub use adapters::*;
pub use cache::{TtlCache, generate_cache_key, weather_cache_key};
pub use config::{AppConfig, CacheConfig, DashboardConfig, WeatherAppConfig};
