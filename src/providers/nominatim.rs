//! Nominatim (OpenStreetMap) geocoder.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ProviderError;
use crate::providers::{GeocodeCandidate, Geocoder};

const PROVIDER: &str = "nominatim";

/// Forward geocoder backed by the Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

impl NominatimGeocoder {
    /// Builds a geocoder for `search_url`.
    ///
    /// Nominatim rejects requests without an identifying User-Agent.
    pub fn new(
        search_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            search_url: search_url.into(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, address: &str) -> Result<Vec<GeocodeCandidate>, ProviderError> {
        debug!("Geocoding address: {}", address);

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", address), ("format", "json")])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: response.status().as_u16(),
            });
        }

        let places: Vec<Map<String, Value>> = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        Ok(places.into_iter().map(GeocodeCandidate::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn geocoder(server: &MockServer) -> NominatimGeocoder {
        NominatimGeocoder::new(
            format!("{}/search", server.uri()),
            Duration::from_secs(5),
            "weather-forecast-test",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_candidates_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "New York"))
            .and(query_param("format", "json"))
            .and(header("user-agent", "weather-forecast-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"lat": "40.7127281", "lon": "-74.0060152", "display_name": "New York"},
                {"lat": "43.1561681", "lon": "-75.8449946", "display_name": "New York State"}
            ])))
            .mount(&mock_server)
            .await;

        let candidates = geocoder(&mock_server).search("New York").await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0].coordinates(),
            Some(Coordinates::new("40.7127281", "-74.0060152"))
        );
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let candidates = geocoder(&mock_server).search("Nowhere at all").await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = geocoder(&mock_server).search("New York").await;
        assert!(matches!(
            result,
            Err(ProviderError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_search_unreadable_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = geocoder(&mock_server).search("New York").await;
        assert!(matches!(result, Err(ProviderError::Decode { .. })));
    }
}
