//! Shared application state
//!
//! Holds the configuration snapshot, the metrics registry, and the weather
//! provider. Construction is fallible so `main` can report startup problems
//! instead of panicking deep in library code.

use anyhow::Context;
use skycast_owm_client::OwmClient;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::metrics::Metrics;
use crate::provider::WeatherProvider;

const OWM_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub metrics: Arc<Metrics>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl AppState {
    /// Build application state, constructing the upstream client from
    /// configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.weather.request_timeout_seconds);
        let client =
            OwmClient::with_base_url(&config.weather.api_key, OWM_BASE_URL.to_string(), timeout)
                .context("Failed to construct weather provider client")?;

        Self::with_provider(config, Arc::new(client))
    }

    /// Build application state with an explicit provider (used by tests).
    pub fn with_provider(
        config: Config,
        weather: Arc<dyn WeatherProvider>,
    ) -> anyhow::Result<Self> {
        let metrics = Metrics::new().context("Failed to build metrics registry")?;

        Ok(Self {
            config: Arc::new(config),
            metrics: Arc::new(metrics),
            weather,
        })
    }
}
