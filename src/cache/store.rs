//! Cache Store Module
//!
//! HashMap-backed forecast storage with per-entry expiry.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Forecast payloads keyed by coordinate string.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss/write counters
    stats: CacheStats,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Write ==
    /// Stores a payload under `key`, replacing any previous entry.
    ///
    /// The expiry window always restarts from now.
    pub fn write(&mut self, key: String, value: Value, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Read ==
    /// Returns the live payload stored under `key`.
    ///
    /// An expired entry is removed and counted as a miss. Reads never touch the
    /// expiry of a live entry.
    pub fn read(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining lifetime of the entry under `key`, if any.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(CacheEntry::ttl_remaining_ms)
    }
}
