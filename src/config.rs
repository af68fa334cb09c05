//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default lifetime of a cached forecast, in seconds (30 minutes)
pub const DEFAULT_FORECAST_TTL: u64 = 30 * 60;

/// Default Nominatim search endpoint
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default Open-Meteo forecast endpoint
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of a cached forecast in seconds
    pub forecast_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Timeout for upstream provider calls in seconds
    pub http_timeout: u64,
    /// Geocoding search endpoint
    pub geocoder_url: String,
    /// Forecast endpoint
    pub forecast_url: String,
    /// User-Agent sent to upstream providers
    pub user_agent: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FORECAST_TTL` - Forecast cache lifetime in seconds (default: 1800)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `HTTP_TIMEOUT` - Upstream call timeout in seconds (default: 10)
    /// - `GEOCODER_URL` - Nominatim search endpoint
    /// - `FORECAST_URL` - Open-Meteo forecast endpoint
    /// - `USER_AGENT` - User-Agent for upstream calls
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            forecast_ttl: parse_var("FORECAST_TTL").unwrap_or(defaults.forecast_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            http_timeout: parse_var("HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
            geocoder_url: env::var("GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            forecast_url: env::var("FORECAST_URL").unwrap_or(defaults.forecast_url),
            user_agent: env::var("USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            forecast_ttl: DEFAULT_FORECAST_TTL,
            cleanup_interval: 60,
            http_timeout: 10,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            user_agent: concat!("weather-forecast/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
