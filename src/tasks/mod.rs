//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweep: drops expired forecasts at the configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
