//! Request handlers for API endpoints

pub mod metrics;
pub mod system;
pub mod weather;
