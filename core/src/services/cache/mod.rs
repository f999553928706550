//! Cache abstraction
//!
//! The cache is an optimization, never a source of truth: every operation is
//! fail-soft, so a broken cache degrades to slower responses rather than
//! errors. Values are JSON strings; callers own serialization.

use async_trait::async_trait;

/// Fail-soft string cache
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Fetch a cached value; `None` on miss or any cache failure
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value with a TTL in seconds; failures are swallowed
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64);

    /// Remove a key; failures are swallowed
    async fn delete(&self, key: &str);
}

/// Cache that stores nothing, for tests and cache-less deployments
#[derive(Default)]
pub struct NoopCache;

#[async_trait]
impl CacheService for NoopCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: u64) {}

    async fn delete(&self, _key: &str) {}
}
