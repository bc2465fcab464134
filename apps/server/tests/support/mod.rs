use anyhow::Context as _;
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use skycast::{api::create_router, provider::WeatherProvider, AppState, Config};
use skycast_owm_client::{CurrentWeather, GeoCoord, MainReadings};
use std::sync::Arc;
use tower::ServiceExt as _;

/// In-memory stand-in for the OpenWeatherMap client.
pub enum StubWeather {
    /// Provider succeeds with this reading.
    Reading(CurrentWeather),
    /// Provider fails at the HTTP level (e.g. bad API key).
    Failure,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current_by_name(
        &self,
        _city: &str,
        _country_code: &str,
    ) -> skycast_owm_client::Result<CurrentWeather> {
        match self {
            StubWeather::Reading(reading) => Ok(reading.clone()),
            StubWeather::Failure => Err(skycast_owm_client::Error::Api {
                status: 401,
                message: "Invalid API key".to_string(),
            }),
        }
    }
}

/// Build a reading with the given geolocation and temperature.
pub fn reading(lat: f64, lon: f64, temp: f64) -> CurrentWeather {
    CurrentWeather {
        coord: GeoCoord { lon, lat },
        main: MainReadings {
            temp,
            humidity: None,
            pressure: None,
        },
        name: "London".to_string(),
    }
}

/// Base configuration for tests; no environment reads, fully deterministic.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.weather.api_key = "test-key".to_string();
    config.build.namespace = "staging".to_string();
    config.build.gitsha = "abc123".to_string();
    config
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new(stub: StubWeather) -> anyhow::Result<Self> {
        Self::new_with_config(stub, |_| {})
    }

    pub fn new_with_config(
        stub: StubWeather,
        mutate: impl FnOnce(&mut Config),
    ) -> anyhow::Result<Self> {
        init_tracing();

        let mut config = test_config();
        mutate(&mut config);

        let state = AppState::with_provider(config, Arc::new(stub))?;
        let router = create_router(state.clone());

        Ok(Self { router, state })
    }

    /// Send one request through the real router stack.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("router oneshot")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("collect body")?;

        Ok((status, headers, body))
    }

    /// Render the current metrics registry as exposition text.
    pub fn scrape(&self) -> anyhow::Result<String> {
        let buffer = self.state.metrics.encode().context("encode metrics")?;
        String::from_utf8(buffer).context("metrics output is utf-8")
    }
}

fn init_tracing() {
    use std::sync::OnceLock;
    use tracing_subscriber::prelude::*;
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "skycast=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}
