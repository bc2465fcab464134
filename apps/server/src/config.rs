//! Server configuration
//!
//! Configuration is layered: built-in defaults, then `SKYCAST__`-prefixed
//! environment variables, then the legacy environment names the deployment
//! already sets (`OWM_API_KEY`, `ENVIRONMENT`, `GITHUB_SHA`). Values are
//! captured once at load; later environment changes are not observed.

use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub weather: WeatherConfig,
    pub build: BuildInfo,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means no CORS headers are emitted.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key (`OWM_API_KEY`). Required.
    pub api_key: String,
    pub city: String,
    pub country_code: String,
    /// Timeout for the upstream provider call, in seconds.
    pub request_timeout_seconds: u64,
}

/// Deploy identification served by `/version`.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildInfo {
    /// Deployment environment label (`ENVIRONMENT`).
    pub namespace: String,
    /// Commit identifier of the running build (`GITHUB_SHA`).
    pub gitsha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON-formatted logs instead of the human-readable format.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cors_origins: Vec::new(),
            },
            weather: WeatherConfig {
                api_key: String::new(),
                city: "London".to_string(),
                country_code: "CA".to_string(),
                request_timeout_seconds: 10,
            },
            build: BuildInfo {
                namespace: String::new(),
                gitsha: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from defaults, environment, and legacy env names.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env if present (development convenience)
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.cors_origins", Vec::<String>::new())?
            .set_default("weather.api_key", "")?
            .set_default("weather.city", "London")?
            .set_default("weather.country_code", "CA")?
            .set_default("weather.request_timeout_seconds", 10)?
            .set_default("build.namespace", "")?
            .set_default("build.gitsha", "")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(config::Environment::with_prefix("SKYCAST").separator("__"))
            // Legacy environment names predate the prefixed scheme and win
            // over it so existing deployments keep working unchanged.
            .set_override_option("weather.api_key", std::env::var("OWM_API_KEY").ok())?
            .set_override_option("build.namespace", std::env::var("ENVIRONMENT").ok())?
            .set_override_option("build.gitsha", std::env::var("GITHUB_SHA").ok())?;

        let config = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize::<Config>()
            .context("Failed to deserialize configuration")?;

        Ok(config)
    }

    /// Validate configuration values that cannot be defaulted sensibly.
    pub fn validate(&self) -> Result<(), String> {
        if self.weather.api_key.is_empty() {
            return Err("weather API key is required (set OWM_API_KEY)".to_string());
        }
        if self.weather.request_timeout_seconds == 0 {
            return Err("weather.request_timeout_seconds must be greater than zero".to_string());
        }
        if self.weather.city.is_empty() {
            return Err("weather.city must not be empty".to_string());
        }
        Ok(())
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    self.server.host, self.server.port
                )
            })
    }
}
