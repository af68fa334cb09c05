//! Forecast Service
//!
//! Resolves a request to coordinates, then serves the forecast from the cache
//! or the forecast provider.
//!
//! Concurrent misses for the same key are not coalesced: each one calls the
//! provider and the last write wins.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::cache::ForecastCache;
use crate::error::{ForecastError, Result};
use crate::models::{Coordinates, ForecastParams, Resolution};
use crate::providers::{ForecastProvider, ForecastVariables, Geocoder, Location};

/// Result of a successful forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub coordinates: Coordinates,
    pub forecast: Value,
    /// True when the payload came from the cache
    pub cached: bool,
}

/// Request handler core with injected collaborators.
#[derive(Clone)]
pub struct ForecastService {
    geocoder: Arc<dyn Geocoder>,
    provider: Arc<dyn ForecastProvider>,
    cache: Arc<dyn ForecastCache>,
    ttl: Duration,
}

impl ForecastService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        provider: Arc<dyn ForecastProvider>,
        cache: Arc<dyn ForecastCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            geocoder,
            provider,
            cache,
            ttl,
        }
    }

    pub fn cache(&self) -> &Arc<dyn ForecastCache> {
        &self.cache
    }

    // == Handle ==
    /// Serves one forecast request.
    ///
    /// # Errors
    /// - `MissingAddress` when neither both coordinates nor a location are given
    /// - `InvalidAddress` when the location has no geocoding match
    /// - `InvalidCoordinates` when coordinate text is not a decimal (cache miss only)
    /// - `Provider` when an upstream call fails
    pub async fn handle(&self, params: ForecastParams) -> Result<ForecastOutcome> {
        let coordinates = match params.resolve() {
            Resolution::Direct(coordinates) => coordinates,
            Resolution::Lookup(address) => self
                .resolve_address(&address)
                .await?
                .ok_or(ForecastError::InvalidAddress)?,
            Resolution::Missing => return Err(ForecastError::MissingAddress),
        };

        self.cached_or_fetch(coordinates).await
    }

    // == Resolve Address ==
    /// Geocodes `address`, taking the first candidate.
    ///
    /// Returns `None` when the provider has no usable candidate.
    pub async fn resolve_address(&self, address: &str) -> Result<Option<Coordinates>> {
        let candidates = self.geocoder.search(address).await.map_err(|e| {
            warn!("Geocoder request failed for address {}: {}", address, e);
            ForecastError::from(e)
        })?;

        let coordinates = candidates.first().and_then(|c| c.coordinates());
        if coordinates.is_none() {
            error!("Geocoder failed for address: {}", address);
        }

        Ok(coordinates)
    }

    // == Cache And Fetch ==
    /// Returns the cached payload for `coordinates`, fetching and caching it on a miss.
    ///
    /// A hit leaves the entry's expiry untouched.
    pub async fn cached_or_fetch(&self, coordinates: Coordinates) -> Result<ForecastOutcome> {
        let key = coordinates.cache_key();

        if let Some(forecast) = self.cache.read(&key).await {
            debug!("Forecast cache hit: {}", key);
            return Ok(ForecastOutcome {
                coordinates,
                forecast,
                cached: true,
            });
        }

        debug!("Forecast cache miss: {}", key);
        let forecast = self.fetch_forecast(&coordinates).await?;

        self.cache.write(key.clone(), forecast.clone(), self.ttl).await;
        info!("Cached forecast for {} ({}s)", key, self.ttl.as_secs());

        Ok(ForecastOutcome {
            coordinates,
            forecast,
            cached: false,
        })
    }

    // == Fetch Forecast ==
    /// Calls the forecast provider with the standard variable set.
    pub async fn fetch_forecast(&self, coordinates: &Coordinates) -> Result<Value> {
        let location = Location::try_from(coordinates)?;

        self.provider
            .fetch(&location, &ForecastVariables::standard())
            .await
            .map_err(|e| {
                warn!("Forecast request failed for {}: {}", coordinates, e);
                ForecastError::from(e)
            })
    }
}
