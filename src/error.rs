//! Error types for the forecast service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Provider Error Enum ==
/// Failure raised by an upstream collaborator (geocoder or forecast provider).
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure talking to the provider
    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider did not answer within the configured timeout
    #[error("{provider} timed out")]
    Timeout { provider: &'static str },

    /// The provider answered with a non-success status
    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },

    /// The provider body could not be decoded
    #[error("{provider} returned an unreadable body: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Classifies a reqwest failure, separating timeouts from other transport errors.
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout { provider }
        } else if err.is_decode() {
            ProviderError::Decode {
                provider,
                message: err.to_string(),
            }
        } else {
            ProviderError::Request {
                provider,
                source: err,
            }
        }
    }
}

// == Forecast Error Enum ==
/// Unified error type for the forecast endpoint.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Neither coordinates nor an address were supplied
    #[error("Address required")]
    MissingAddress,

    /// The geocoder could not resolve the address
    #[error("Invalid address")]
    InvalidAddress,

    /// Coordinate text could not be read as a decimal number
    #[error("Invalid coordinates")]
    InvalidCoordinates(String),

    /// An upstream provider failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ForecastError {
    fn into_response(self) -> Response {
        let status = match &self {
            ForecastError::MissingAddress => StatusCode::BAD_REQUEST,
            ForecastError::InvalidAddress => StatusCode::UNPROCESSABLE_ENTITY,
            ForecastError::InvalidCoordinates(_) => StatusCode::BAD_REQUEST,
            ForecastError::Provider(ProviderError::Timeout { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ForecastError::Provider(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the forecast service.
pub type Result<T> = std::result::Result<T, ForecastError>;
