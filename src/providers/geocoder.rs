//! Geocoding collaborator: free-text address to candidate locations.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ProviderError;
use crate::models::Coordinates;

/// Resolves an address into candidates, best match first.
///
/// Ranking is entirely up to the provider; an empty list means the address is
/// unresolvable.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, address: &str) -> Result<Vec<GeocodeCandidate>, ProviderError>;
}

/// One geocoding match, holding the provider's raw data map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeCandidate {
    pub data: Map<String, Value>,
}

impl GeocodeCandidate {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Reads the `lat`/`lon` fields, keeping the provider's textual form.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let latitude = coordinate_text(self.data.get("lat")?)?;
        let longitude = coordinate_text(self.data.get("lon")?)?;
        Some(Coordinates::new(latitude, longitude))
    }
}

fn coordinate_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
