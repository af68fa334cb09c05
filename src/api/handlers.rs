//! API Handlers
//!
//! HTTP request handlers for each forecast server endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::ForecastCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{ForecastParams, ForecastResponse, HealthResponse, StatsResponse};
use crate::providers::{ForecastProvider, Geocoder, NominatimGeocoder, OpenMeteoClient};
use crate::service::ForecastService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ForecastService>,
}

impl AppState {
    pub fn new(service: ForecastService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Wires the production providers around `cache` using the Config.
    pub fn from_config(
        config: &Config,
        cache: Arc<dyn ForecastCache>,
    ) -> std::result::Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.http_timeout);

        let geocoder: Arc<dyn Geocoder> = Arc::new(NominatimGeocoder::new(
            config.geocoder_url.clone(),
            timeout,
            &config.user_agent,
        )?);
        let provider: Arc<dyn ForecastProvider> = Arc::new(OpenMeteoClient::new(
            config.forecast_url.clone(),
            timeout,
            &config.user_agent,
        )?);

        Ok(Self::new(ForecastService::new(
            geocoder,
            provider,
            cache,
            Duration::from_secs(config.forecast_ttl),
        )))
    }
}

/// Handler for GET /forecast
///
/// Resolves coordinates from `latitude`/`longitude` or `location` and returns
/// the forecast with its cache flag.
pub async fn forecast_handler(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<ForecastResponse>> {
    let outcome = state.service.handle(params).await?;

    Ok(Json(ForecastResponse::new(outcome.forecast, outcome.cached)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache().stats().await;

    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
