use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky/precipitation label as reported by the weather provider.
///
/// The known labels form a small closed set; anything else is kept verbatim
/// in [`WeatherCondition::Other`] so new provider labels never fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
    Smoke,
    Haze,
    Fog,
    Other(String),
}

impl WeatherCondition {
    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::Smoke => "Smoke",
            WeatherCondition::Haze => "Haze",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Other(label) => label,
        }
    }

    /// Every label with a dedicated variant, in display order.
    pub fn known() -> &'static [WeatherCondition] {
        &KNOWN_CONDITIONS
    }
}

static KNOWN_CONDITIONS: [WeatherCondition; 10] = [
    WeatherCondition::Clear,
    WeatherCondition::Clouds,
    WeatherCondition::Rain,
    WeatherCondition::Snow,
    WeatherCondition::Thunderstorm,
    WeatherCondition::Drizzle,
    WeatherCondition::Mist,
    WeatherCondition::Smoke,
    WeatherCondition::Haze,
    WeatherCondition::Fog,
];

impl From<&str> for WeatherCondition {
    fn from(value: &str) -> Self {
        // Exact match: the provider sends capitalised labels.
        match value {
            "Clear" => WeatherCondition::Clear,
            "Clouds" => WeatherCondition::Clouds,
            "Rain" => WeatherCondition::Rain,
            "Snow" => WeatherCondition::Snow,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Drizzle" => WeatherCondition::Drizzle,
            "Mist" => WeatherCondition::Mist,
            "Smoke" => WeatherCondition::Smoke,
            "Haze" => WeatherCondition::Haze,
            "Fog" => WeatherCondition::Fog,
            other => WeatherCondition::Other(other.to_string()),
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(value: String) -> Self {
        WeatherCondition::from(value.as_str())
    }
}

impl From<WeatherCondition> for String {
    fn from(value: WeatherCondition) -> Self {
        match value {
            WeatherCondition::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions for one city, as returned by a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub city_name: String,
    pub country_code: String,
    pub temperature_celsius: f64,
    pub feels_like_celsius: f64,
    pub humidity_percent: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub condition: WeatherCondition,
    /// Free-text description, e.g. "scattered clouds".
    pub description: String,
}

impl CurrentObservation {
    /// Description with every word capitalised ("light rain" -> "Light Rain").
    pub fn description_title(&self) -> String {
        self.description
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Main block of a raw forecast entry; only the temperature is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
}

/// One raw sample of the provider's forecast list (`list[]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub main: ForecastMain,
    /// Timestamp text in `%Y-%m-%d %H:%M:%S`.
    pub dt_txt: String,
}

impl ForecastEntry {
    pub fn new(dt_txt: impl Into<String>, temp: f64) -> Self {
        Self {
            main: ForecastMain { temp },
            dt_txt: dt_txt.into(),
        }
    }
}

/// One point of the extracted forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temperature_celsius: f64,
}
