//! Application layer - Use cases and orchestration
//!
//! Contains the dashboard use case, the forecast transformer, and the port
//! definitions the infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, FetchError};
pub use ports::*;
pub use services::*;
