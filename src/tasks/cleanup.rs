//! Forecast Cache Sweeper
//!
//! Background task that periodically drops expired forecasts.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a task that removes expired forecasts every `cleanup_interval_secs`.
///
/// Reads already ignore expired entries; the sweep only reclaims memory.
/// Abort the returned handle on shutdown.
pub fn spawn_cleanup_task(cache: MemoryCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting forecast cache sweeper with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("Forecast cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Forecast cache sweep: no expired entries found");
            }
        }
    })
}
