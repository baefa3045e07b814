//! Domain layer for the Enapló weather dashboard
//!
//! Pure classification tables and value objects: Beaufort categories,
//! compass sectors, cloudiness labels, city names and coordinates.
//! Nothing here performs I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
