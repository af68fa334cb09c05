//! Cache Module
//!
//! Time-bounded storage of forecast payloads keyed by coordinate string.

mod entry;
mod memory;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Forecast Cache ==
/// Key/value store the forecast service reads from and writes to.
///
/// Implementations own their concurrency and eviction guarantees.
#[async_trait]
pub trait ForecastCache: Send + Sync {
    /// Returns the live payload under `key`, if any.
    async fn read(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    async fn write(&self, key: String, value: Value, ttl: Duration);

    /// Current hit/miss/write counters.
    async fn stats(&self) -> CacheStats;
}
