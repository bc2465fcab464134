//! OpenWeatherMap API client

use crate::error::{Error, Result};
use crate::models::{ApiErrorBody, CurrentWeather};
use reqwest::Client;
use std::time::Duration;

const OWM_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Measurement units for temperature readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Celsius
    #[default]
    Metric,
    /// Fahrenheit
    Imperial,
    /// Kelvin
    Standard,
}

impl Units {
    fn as_query_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }
}

/// Client for the OpenWeatherMap current-weather API.
pub struct OwmClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: Units,
    lang: String,
}

impl OwmClient {
    /// Create a new client with default settings (metric units, English,
    /// 10 second request timeout).
    ///
    /// Fails if the API key is empty, so a misconfigured deployment is
    /// caught at startup rather than on the first request.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, OWM_BASE_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
            units: Units::default(),
            lang: "en".to_string(),
        })
    }

    /// Override the measurement units.
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Fetch current weather for a city identified by name and country code,
    /// e.g. `("London", "CA")`.
    pub async fn current_by_name(&self, city: &str, country_code: &str) -> Result<CurrentWeather> {
        let url = format!("{}/weather", self.base_url);
        let location = format!("{city},{country_code}");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("units", self.units.as_query_value()),
                ("lang", self.lang.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // OWM returns {"cod": "...", "message": "..."} on failure.
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let weather: CurrentWeather = response.json().await?;
        Ok(weather)
    }
}
