//! Weather lookup handler (GET /)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{provider::WeatherProvider as _, state::AppState, Error, Result};

/// Current temperature for the configured location (GET /)
///
/// Calls the upstream provider exactly once per request; no cache, no
/// retry. A provider failure or the (0.0, 0.0) sentinel geolocation both
/// surface as an opaque 500.
pub async fn current_weather(State(state): State<AppState>) -> Result<Response> {
    let cfg = &state.config.weather;

    let reading = state
        .weather
        .current_by_name(&cfg.city, &cfg.country_code)
        .await?;

    // OpenWeatherMap signals "location not resolved / invalid key" with a
    // zero geolocation instead of an error status.
    if !reading.location_resolved() {
        return Err(Error::LocationNotResolved {
            query: format!("{},{}", cfg.city, cfg.country_code),
        });
    }

    let body = render_template(&cfg.city, &cfg.country_code, reading.main.temp);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        body,
    )
        .into_response())
}

fn render_template(city: &str, country_code: &str, temp: f64) -> String {
    format!("\nTemperature in {city}, {country_code} is {temp:.6} C <br/>\n")
}
