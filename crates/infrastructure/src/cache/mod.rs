//! Response caching
//!
//! [`TtlCache`] keeps payloads in memory and judges freshness with the
//! injected [`Clock`](application::ports::Clock). Keys are blake3 digests so
//! city names of any length or script map to fixed-size keys.

mod ttl_cache;

pub use ttl_cache::TtlCache;

/// `{namespace}:{blake3 hex}` over `parts`, each terminated by `|`
#[must_use]
pub fn generate_cache_key(namespace: &str, parts: &[&str]) -> String {
    let digest = parts
        .iter()
        .fold(blake3::Hasher::new(), |mut hasher, part| {
            hasher.update(part.as_bytes()).update(b"|");
            hasher
        })
        .finalize();
    format!("{namespace}:{}", digest.to_hex())
}

/// Key of one (city, endpoint) pair
#[must_use]
pub fn weather_cache_key(city: &str, endpoint: &str) -> String {
    generate_cache_key("weather", &[city, endpoint])
}
