//! In-memory TTL cache
//!
//! Keeps `(payload, inserted_at)` pairs behind a mutex and decides expiry
//! at read time against an injected [`Clock`]. Nothing is persisted.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use application::{
    error::ApplicationError,
    ports::{CachePort, CacheStats, Clock},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    inserted_at: DateTime<Utc>,
    ttl: TimeDelta,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.inserted_at) >= self.ttl
    }
}

/// Clock-driven in-memory cache
///
/// An entry is served while `now - inserted_at < ttl`. Expired entries are
/// dropped when read. The lock is never held across an await point.
pub struct TtlCache {
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, Entry>>,
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
}

impl std::fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.entries.lock().len())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl TtlCache {
    /// Create an empty cache reading time from `clock`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expirations: AtomicU64::new(0),
        }
    }

    /// Number of stored entries, expired ones not yet read included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl CachePort for TtlCache {
    #[instrument(skip(self), level = "debug")]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        let expired = match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache hit");
                return Ok(Some(entry.value.clone()));
            },
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(key);
            self.expirations.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache entry expired");
        } else {
            debug!(key = %key, "Cache miss");
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        Ok(None)
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), ApplicationError> {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let entry = Entry {
            value,
            inserted_at: self.clock.now(),
            ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
        debug!(key = %key, "Cache set");
        Ok(())
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            entries: self.entries.lock().len() as u64,
        }
    }
}
