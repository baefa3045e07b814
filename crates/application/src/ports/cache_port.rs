//! Response cache port
//!
//! Byte-oriented so adapters stay format-agnostic; [`CachePortExt`] adds
//! JSON (de)serialization on top.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ApplicationError;

/// Key/value store with a per-entry time-to-live
///
/// An entry whose TTL has elapsed is never returned.
#[async_trait]
pub trait CachePort: Send + Sync + std::fmt::Debug {
    /// Live value for `key`, `None` when absent or stale
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Store `value`, replacing any previous entry and its insertion time
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), ApplicationError>;

    fn stats(&self) -> CacheStats;
}

/// JSON helpers for any [`CachePort`]
#[async_trait]
pub trait CachePortExt: CachePort {
    async fn get<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: DeserializeOwned + Send,
    {
        let Some(bytes) = self.get_bytes(key).await? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| ApplicationError::Internal(format!("cached value for {key} is unreadable: {e}")))
    }

    async fn set<T>(&self, key: &str, value: &T, ttl: Duration) -> Result<(), ApplicationError>
    where
        T: Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ApplicationError::Internal(format!("value for {key} not cacheable: {e}")))?;
        self.set_bytes(key, bytes, ttl).await
    }
}

impl<C: CachePort + ?Sized> CachePortExt for C {}

/// Counters since construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    /// Includes reads that found a stale entry
    pub misses: u64,
    /// Stale entries dropped on read
    pub expirations: u64,
    /// Entries currently held, stale ones included until read
    pub entries: u64,
}

/// Common TTLs
pub mod ttl {
    use std::time::Duration;

    /// Default lifetime of weather payloads
    pub const DAY: Duration = Duration::from_secs(86_400);

    pub const HOUR: Duration = Duration::from_secs(3_600);
}
