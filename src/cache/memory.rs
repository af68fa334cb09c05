//! Process-wide in-memory forecast cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, ForecastCache};

/// Cloneable handle to a shared [`CacheStore`].
///
/// Created once per process; clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Remaining lifetime of the entry under `key`, if any.
    pub async fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.store.read().await.ttl_remaining_ms(key)
    }
}

#[async_trait]
impl ForecastCache for MemoryCache {
    async fn read(&self, key: &str) -> Option<Value> {
        // Write lock: an expired hit is evicted and counters change
        self.store.write().await.read(key)
    }

    async fn write(&self, key: String, value: Value, ttl: Duration) {
        self.store.write().await.write(key, value, ttl);
    }

    async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}
