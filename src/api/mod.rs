//! API Module
//!
//! HTTP handlers and routing for the forecast server.
//!
//! # Endpoints
//! - `GET /forecast?latitude=&longitude=&location=` - Weather forecast
//! - `GET /stats` - Forecast cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
