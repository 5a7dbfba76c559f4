//! Ties the fetcher to the condition classifier, advisory engine and forecast
//! extractor.

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    advisory::Advisory,
    error::FetchError,
    fetcher::WeatherFetcher,
    forecast::extract_series,
    model::{CurrentObservation, ForecastSample},
};

/// Everything the presentation layer needs for one city.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub observation: CurrentObservation,
    pub icon: &'static str,
    pub advisory: Advisory,
    pub forecast: Vec<ForecastSample>,
}

impl WeatherReport {
    /// Build a report from already-fetched data.
    ///
    /// Icon and advisory are computed independently of each other.
    pub fn assemble(
        observation: CurrentObservation,
        forecast: Vec<ForecastSample>,
    ) -> Self {
        let icon = observation.condition.icon();
        let advisory = Advisory::evaluate(observation.temperature_celsius, &observation.condition);

        Self {
            observation,
            icon,
            advisory,
            forecast,
        }
    }
}

#[derive(Debug)]
pub struct WeatherDashboard {
    fetcher: Box<dyn WeatherFetcher>,
}

impl WeatherDashboard {
    pub fn new(fetcher: Box<dyn WeatherFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch current conditions and forecast for `city` and derive the report.
    ///
    /// Blank input is rejected before any request is made. Any failure aborts
    /// the whole report.
    #[instrument(skip(self))]
    pub async fn report(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyCity);
        }

        let observation = self.fetcher.fetch_current(city).await?;
        let entries = self.fetcher.fetch_forecast(city).await?;
        let forecast = extract_series(&entries)?;

        info!(
            city = %observation.city_name,
            condition = %observation.condition,
            samples = forecast.len(),
            "Weather report ready"
        );

        Ok(WeatherReport::assemble(observation, forecast))
    }
}
