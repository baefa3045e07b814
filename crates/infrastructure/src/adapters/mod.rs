//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod clock;
mod env_secret_store;
mod weather_adapter;

pub use clock::{ManualClock, SystemClock};
pub use env_secret_store::EnvSecretStore;
pub use weather_adapter::WeatherAdapter;
