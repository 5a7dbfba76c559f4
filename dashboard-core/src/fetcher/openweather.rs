use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    Config,
    error::FetchError,
    model::{CurrentObservation, ForecastEntry, WeatherCondition},
};

use super::WeatherFetcher;

#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.require_api_key()?;
        let fetcher = Self::new(api_key.to_owned(), config.base_url.clone(), config.timeout())?;
        Ok(fetcher)
    }

    /// GET `{base_url}/{endpoint}` for `city` and decode the body once both
    /// the HTTP status and the payload's `cod` report success.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> Result<T, FetchError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, city, "Requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        let payload: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) if !status.is_success() => Value::Null,
            Err(e) => {
                return Err(FetchError::Parse(format!("{e}: {}", truncate_body(&body))));
            }
        };

        if !status.is_success() || !cod_is_ok(payload.get("cod")) {
            let message = api_message(&payload);
            warn!(status = status.as_u16(), %message, endpoint, "OpenWeather request failed");
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_value(payload)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<ForecastEntry>,
}

impl TryFrom<OwCurrentResponse> for CurrentObservation {
    type Error = FetchError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Parse("current weather has an empty `weather` list".into()))?;

        Ok(CurrentObservation {
            city_name: parsed.name,
            country_code: parsed.sys.country,
            temperature_celsius: parsed.main.temp,
            feels_like_celsius: parsed.main.feels_like,
            humidity_percent: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            wind_speed_mps: parsed.wind.speed,
            condition: WeatherCondition::from(weather.main),
            description: weather.description,
        })
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    #[instrument(skip(self))]
    async fn fetch_current(&self, city: &str) -> Result<CurrentObservation, FetchError> {
        let parsed: OwCurrentResponse = self.get("weather", city).await?;
        CurrentObservation::try_from(parsed)
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError> {
        let parsed: OwForecastResponse = self.get("forecast", city).await?;
        debug!(samples = parsed.list.len(), "Received forecast");
        Ok(parsed.list)
    }
}

/// `/weather` sends `cod` as a number, `/forecast` as a string.
fn cod_is_ok(cod: Option<&Value>) -> bool {
    match cod {
        Some(Value::Number(n)) => n.as_u64() == Some(200),
        Some(Value::String(s)) => s.trim() == "200",
        _ => false,
    }
}

fn api_message(payload: &Value) -> String {
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or("Unknown error")
        .to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cod_accepts_number_and_string() {
        assert!(cod_is_ok(Some(&json!(200))));
        assert!(cod_is_ok(Some(&json!("200"))));
        assert!(!cod_is_ok(Some(&json!("404"))));
        assert!(!cod_is_ok(Some(&json!(401))));
        assert!(!cod_is_ok(None));
    }

    #[test]
    fn api_message_falls_back() {
        assert_eq!(api_message(&json!({"cod": "404", "message": "city not found"})), "city not found");
        assert_eq!(api_message(&json!({"cod": "200", "message": 0})), "Unknown error");
        assert_eq!(api_message(&Value::Null), "Unknown error");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn current_response_maps_to_observation() {
        let parsed: OwCurrentResponse = serde_json::from_value(json!({
            "name": "Bengaluru",
            "sys": {"country": "IN"},
            "main": {"temp": 27.3, "feels_like": 28.1, "humidity": 54, "pressure": 1011},
            "wind": {"speed": 4.6},
            "weather": [{"main": "Haze", "description": "haze"}]
        }))
        .unwrap();

        let obs = CurrentObservation::try_from(parsed).unwrap();
        assert_eq!(obs.city_name, "Bengaluru");
        assert_eq!(obs.country_code, "IN");
        assert_eq!(obs.condition, WeatherCondition::Haze);
        assert_eq!(obs.pressure_hpa, 1011);
        assert_eq!(obs.humidity_percent, 54);
    }

    #[test]
    fn empty_weather_list_is_a_parse_error() {
        let parsed: OwCurrentResponse = serde_json::from_value(json!({
            "name": "Nowhere",
            "sys": {"country": "XX"},
            "main": {"temp": 1.0, "feels_like": 1.0, "humidity": 1, "pressure": 1000},
            "wind": {"speed": 0.0},
            "weather": []
        }))
        .unwrap();

        let err = CurrentObservation::try_from(parsed).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
