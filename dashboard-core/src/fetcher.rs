use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::FetchError,
    fetcher::openweather::OpenWeatherFetcher,
    model::{CurrentObservation, ForecastEntry},
};

pub mod openweather;

/// Source of already-parsed weather data for a city.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<CurrentObservation, FetchError>;

    /// Forecast samples in the order the provider returned them.
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError>;
}

/// Construct the OpenWeather fetcher from config.
pub fn fetcher_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherFetcher>> {
    let fetcher = OpenWeatherFetcher::from_config(config)?;
    Ok(Box::new(fetcher))
}
