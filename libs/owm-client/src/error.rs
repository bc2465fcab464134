//! Error types for the OpenWeatherMap client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// OpenWeatherMap client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("API key must not be empty")]
    MissingApiKey,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: status {status}: {message}")]
    Api { status: u16, message: String },
}
