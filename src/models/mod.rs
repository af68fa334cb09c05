//! Request and Response models for the forecast API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP requests and response bodies.

pub mod coordinates;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use coordinates::Coordinates;
pub use requests::{ForecastParams, Resolution};
pub use responses::{ErrorResponse, ForecastResponse, HealthResponse, StatsResponse};
