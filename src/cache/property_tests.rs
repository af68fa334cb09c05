//! Property-Based Tests for the Cache Store
//!
//! Uses proptest to check the single-payload-per-key and expiry rules.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheStore;

const TTL: Duration = Duration::from_secs(1800);

/// Coordinate-like keys such as "40.7128,-74.006"
fn key_strategy() -> impl Strategy<Value = String> {
    (-90i32..=90, 0u16..10_000, -180i32..=180, 0u16..10_000)
        .prop_map(|(lat, lat_frac, lon, lon_frac)| format!("{lat}.{lat_frac},{lon}.{lon_frac}"))
}

fn payload_strategy() -> impl Strategy<Value = Value> {
    (any::<i16>(), any::<u8>()).prop_map(|(temperature, code)| {
        json!({"current": {"temperature_2m": temperature, "weather_code": code}})
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every read returns the most recent write for that key, and the store
    // never holds more than one entry per key.
    #[test]
    fn prop_last_write_wins(
        writes in prop::collection::vec((key_strategy(), payload_strategy()), 1..40)
    ) {
        let mut store = CacheStore::new();
        let mut expected: HashMap<String, Value> = HashMap::new();

        for (key, value) in writes {
            store.write(key.clone(), value.clone(), TTL);
            expected.insert(key, value);
        }

        prop_assert_eq!(store.len(), expected.len());
        for (key, value) in &expected {
            let got = store.read(key);
            prop_assert_eq!(got.as_ref(), Some(value));
        }
        prop_assert_eq!(store.stats().hits, expected.len() as u64);
    }

    // Reads never change the stored entry or its expiry.
    #[test]
    fn prop_reads_do_not_mutate(key in key_strategy(), value in payload_strategy(), reads in 1usize..20) {
        let mut store = CacheStore::new();
        store.write(key.clone(), value.clone(), TTL);
        let expiry_before = store.ttl_remaining_ms(&key);

        for _ in 0..reads {
            let got = store.read(&key);
            prop_assert_eq!(got.as_ref(), Some(&value));
        }

        prop_assert!(store.ttl_remaining_ms(&key) <= expiry_before);
        prop_assert_eq!(store.stats().writes, 1);
    }

    // A zero TTL entry is never served.
    #[test]
    fn prop_zero_ttl_never_served(key in key_strategy(), value in payload_strategy()) {
        let mut store = CacheStore::new();
        store.write(key.clone(), value, Duration::ZERO);

        prop_assert!(store.read(&key).is_none());
        prop_assert!(store.is_empty());
    }
}
