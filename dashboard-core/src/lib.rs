//! Core library for the `weather-dashboard` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetcher (current conditions + forecast)
//! - Display mapping: condition icons, advisories, forecast series
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod advisory;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod forecast;
pub mod icon;
pub mod model;
pub mod report;

pub use advisory::{Advisory, advise_for};
pub use config::Config;
pub use error::FetchError;
pub use fetcher::{WeatherFetcher, fetcher_from_config, openweather::OpenWeatherFetcher};
pub use forecast::extract_series;
pub use icon::{DEFAULT_ICON, icon_for};
pub use model::{CurrentObservation, ForecastEntry, ForecastSample, WeatherCondition};
pub use report::{WeatherDashboard, WeatherReport};
