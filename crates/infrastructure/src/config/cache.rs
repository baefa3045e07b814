//! Cache configuration with TTL settings.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Response cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// How long a weather payload stays fresh, in seconds (default: 24 hours)
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

const fn default_cache_ttl() -> u64 {
    24 * 60 * 60 // 24 hours
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl CacheConfig {
    /// Get the TTL as a Duration
    #[must_use]
    pub const fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_config_default() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.ttl(), application::ports::ttl::DAY);
    }

    #[test]
    fn cache_config_deserialize_partial() {
        let config: CacheConfig = serde_json::from_str(r#"{"ttl_secs": 600}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.ttl_secs, 600);
    }
}
