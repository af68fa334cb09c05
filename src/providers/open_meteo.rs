//! Open-Meteo forecast client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::ProviderError;
use crate::providers::{ForecastProvider, ForecastVariables, Location};

const PROVIDER: &str = "open-meteo";

/// Client for the Open-Meteo `/v1/forecast` endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(
        forecast_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            forecast_url: forecast_url.into(),
        })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch(
        &self,
        location: &Location,
        variables: &ForecastVariables,
    ) -> Result<Value, ProviderError> {
        debug!(
            "Fetching forecast for {},{}",
            location.latitude, location.longitude
        );

        // Daily variables require a timezone
        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", variables.current.join(",")),
            ("hourly", variables.hourly.join(",")),
            ("daily", variables.daily.join(",")),
            ("timezone", "auto".to_string()),
        ];

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, timeout: Duration) -> OpenMeteoClient {
        OpenMeteoClient::new(format!("{}/v1/forecast", server.uri()), timeout, "test").unwrap()
    }

    fn new_york() -> Location {
        Location::try_from(&Coordinates::new("40.7128", "-74.006")).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_fixed_variables_and_passes_body_through() {
        let mock_server = MockServer::start().await;
        let body = json!({
            "latitude": 40.710335,
            "current": {"temperature_2m": 22, "windspeed_10m": 5, "weather_code": 1},
            "hourly": {"temperature_2m": [22, 21], "windspeed_10m": [5, 4], "relative_humidity_2m": [60, 65]},
            "daily": {"temperature_2m_max": [24], "temperature_2m_min": [15], "weather_code": [1]}
        });

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "40.7128"))
            .and(query_param("longitude", "-74.006"))
            .and(query_param("current", "temperature_2m,windspeed_10m,weather_code"))
            .and(query_param(
                "hourly",
                "temperature_2m,windspeed_10m,relative_humidity_2m",
            ))
            .and(query_param(
                "daily",
                "temperature_2m_max,temperature_2m_min,weather_code",
            ))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let payload = client(&mock_server, Duration::from_secs(5))
            .fetch(&new_york(), &ForecastVariables::standard())
            .await
            .unwrap();

        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error": true, "reason": "Latitude must be in range"})),
            )
            .mount(&mock_server)
            .await;

        let result = client(&mock_server, Duration::from_secs(5))
            .fetch(&new_york(), &ForecastVariables::standard())
            .await;

        assert!(matches!(
            result,
            Err(ProviderError::Status { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let result = client(&mock_server, Duration::from_millis(100))
            .fetch(&new_york(), &ForecastVariables::standard())
            .await;

        assert!(matches!(result, Err(ProviderError::Timeout { .. })));
    }
}
