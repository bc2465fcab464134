//! OpenWeatherMap current-weather client
//!
//! This crate provides a small async client for the OpenWeatherMap
//! "current weather data" API (`/data/2.5/weather`).
//!
//! # Examples
//!
//! ```rust,no_run
//! use skycast_owm_client::OwmClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OwmClient::new("my-api-key")?;
//! let weather = client.current_by_name("London", "CA").await?;
//! println!("{} C", weather.main.temp);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::{OwmClient, Units};
pub use error::{Error, Result};
pub use models::{CurrentWeather, GeoCoord, MainReadings};
