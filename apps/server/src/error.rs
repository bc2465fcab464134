//! Error types for the weather server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Weather provider error: {0}")]
    Weather(#[from] skycast_owm_client::Error),

    #[error("Weather provider could not resolve location: {query}")]
    LocationNotResolved { query: String },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Every failure here is an upstream or internal problem. The detail
        // is logged server-side; the client gets an opaque 500 with an
        // empty body, never the upstream error text.
        match &self {
            Error::Weather(_) => {
                tracing::error!(error = %self, "Weather provider call failed");
            }
            Error::LocationNotResolved { query } => {
                tracing::warn!(query = %query, "Weather provider returned sentinel geolocation");
            }
            Error::Internal(_) | Error::Other(_) => {
                tracing::error!(error = %self, "Internal error");
            }
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_500() {
        let error = Error::Weather(skycast_owm_client::Error::MissingApiKey);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unresolved_location_maps_to_500() {
        let error = Error::LocationNotResolved {
            query: "Nowhere,XX".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
