//! Skycast - a small weather service
//!
//! An HTTP server exposing a current-temperature lookup backed by
//! OpenWeatherMap, plus operational endpoints:
//! - `/ping`, `/health`, `/version` for liveness and deploy identification
//! - `/metrics` for Prometheus scrapes
//!
//! Every registered route runs through a metrics middleware that records
//! per-route request counts, per-status response counts, and latency.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod provider;
pub mod request_context;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
