//! Request DTOs for the forecast API
//!
//! Defines the query parameters accepted by `GET /forecast` and how they are
//! classified into a resolution path.

use serde::Deserialize;

use super::Coordinates;

/// Query parameters for `GET /forecast`
///
/// # Fields
/// - `latitude` / `longitude`: used directly when both are present
/// - `location`: free-text address, geocoded when coordinates are absent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastParams {
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// How a request will obtain its coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Both coordinates were supplied
    Direct(Coordinates),
    /// Only an address was supplied
    Lookup(String),
    /// Nothing usable was supplied
    Missing,
}

impl ForecastParams {
    /// Classifies the parameters.
    ///
    /// Coordinates only need to be present; their content is not checked here.
    /// A blank `location` counts as absent.
    pub fn resolve(self) -> Resolution {
        match (self.latitude, self.longitude, self.location) {
            (Some(latitude), Some(longitude), _) => {
                Resolution::Direct(Coordinates::new(latitude, longitude))
            }
            (_, _, Some(location)) if !location.trim().is_empty() => Resolution::Lookup(location),
            _ => Resolution::Missing,
        }
    }
}
