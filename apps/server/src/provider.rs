//! Weather provider seam
//!
//! Handlers depend on this trait rather than the concrete client, so tests
//! can substitute an in-memory double for the remote API.

use async_trait::async_trait;
use skycast_owm_client::{CurrentWeather, OwmClient};

/// Source of current weather readings.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current weather for `(city, country_code)`.
    async fn current_by_name(
        &self,
        city: &str,
        country_code: &str,
    ) -> skycast_owm_client::Result<CurrentWeather>;
}

#[async_trait]
impl WeatherProvider for OwmClient {
    async fn current_by_name(
        &self,
        city: &str,
        country_code: &str,
    ) -> skycast_owm_client::Result<CurrentWeather> {
        OwmClient::current_by_name(self, city, country_code).await
    }
}
