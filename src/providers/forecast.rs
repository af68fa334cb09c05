//! Forecast collaborator: location plus requested variables to a payload.

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{ForecastError, ProviderError};
use crate::models::Coordinates;

/// Fetches a forecast payload for a location.
///
/// The payload is returned as-is; callers do not validate its shape.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch(
        &self,
        location: &Location,
        variables: &ForecastVariables,
    ) -> Result<Value, ProviderError>;
}

/// Exact decimal location handed to the forecast provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Coordinate text that is not a decimal number is rejected rather than read as zero.
impl TryFrom<&Coordinates> for Location {
    type Error = ForecastError;

    fn try_from(coords: &Coordinates) -> Result<Self, Self::Error> {
        Ok(Self {
            latitude: parse_decimal(&coords.latitude)?,
            longitude: parse_decimal(&coords.longitude)?,
        })
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, ForecastError> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ForecastError::InvalidCoordinates(text.to_string()))
}

/// Variable groups requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastVariables {
    pub current: &'static [&'static str],
    pub hourly: &'static [&'static str],
    pub daily: &'static [&'static str],
}

impl ForecastVariables {
    /// The fixed request shape used for every forecast.
    pub const fn standard() -> Self {
        Self {
            current: &["temperature_2m", "windspeed_10m", "weather_code"],
            hourly: &["temperature_2m", "windspeed_10m", "relative_humidity_2m"],
            daily: &["temperature_2m_max", "temperature_2m_min", "weather_code"],
        }
    }
}
