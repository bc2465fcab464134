//! Response models for the current-weather API

use serde::Deserialize;

/// Current weather conditions for a single location.
///
/// Only the fields the service consumes are modeled; the API returns
/// considerably more (wind, clouds, sys, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub coord: GeoCoord,
    pub main: MainReadings,
    /// Resolved place name, e.g. "London".
    #[serde(default)]
    pub name: String,
}

impl CurrentWeather {
    /// Whether the provider actually resolved the queried location.
    ///
    /// OpenWeatherMap reports a geolocation of exactly (0.0, 0.0) when the
    /// location could not be resolved (or the API key is invalid), rather
    /// than failing the request outright.
    pub fn location_resolved(&self) -> bool {
        !(self.coord.lat == 0.0 && self.coord.lon == 0.0)
    }
}

/// Geographic coordinates of the resolved location.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoCoord {
    pub lon: f64,
    pub lat: f64,
}

/// Main weather readings (temperature block).
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Temperature in the requested units.
    pub temp: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
    #[serde(default)]
    pub pressure: Option<f64>,
}

/// Error body the API returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
