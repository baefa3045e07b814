//! Clock port
//!
//! Source of the current instant, injected wherever expiry is decided so
//! tests can move time forward without sleeping.

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Port for reading the current time
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
