//! Upstream Providers
//!
//! Traits for the geocoding and forecast collaborators, with their HTTP
//! implementations.
//!
//! # Providers
//! - Geocoding: Nominatim `/search`
//! - Forecast: Open-Meteo `/v1/forecast`

mod forecast;
mod geocoder;
mod nominatim;
mod open_meteo;

pub use forecast::{ForecastProvider, ForecastVariables, Location};
pub use geocoder::{GeocodeCandidate, Geocoder};
pub use nominatim::NominatimGeocoder;
pub use open_meteo::OpenMeteoClient;
