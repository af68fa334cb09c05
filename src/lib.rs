//! Weather Forecast - a small forecast service
//!
//! Serves forecasts by coordinates or geocoded address, caching each
//! coordinate pair's forecast for a fixed window.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::{ForecastOutcome, ForecastService};
pub use tasks::spawn_cleanup_task;
