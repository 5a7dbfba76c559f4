//! Advisory engine: turns temperature and condition into a short suggestion.
//!
//! Rules are evaluated in order and the first match wins:
//! 1. rain
//! 2. heat (above 35 °C)
//! 3. cold (below 15 °C)
//! 4. clear sky
//! 5. clouds
//! 6. anything else

use serde::Serialize;
use std::fmt;

use crate::model::WeatherCondition;

pub const HEAT_THRESHOLD_C: f64 = 35.0;
pub const COLD_THRESHOLD_C: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Advisory {
    Umbrella,
    Heat,
    Cold,
    Outdoor,
    Mild,
    General,
}

impl Advisory {
    /// Pick the advisory for the given conditions.
    ///
    /// Rain wins over the temperature thresholds, even when the temperature
    /// is extreme.
    pub fn evaluate(temperature_celsius: f64, condition: &WeatherCondition) -> Self {
        if *condition == WeatherCondition::Rain {
            Advisory::Umbrella
        } else if temperature_celsius > HEAT_THRESHOLD_C {
            Advisory::Heat
        } else if temperature_celsius < COLD_THRESHOLD_C {
            Advisory::Cold
        } else if *condition == WeatherCondition::Clear {
            Advisory::Outdoor
        } else if *condition == WeatherCondition::Clouds {
            Advisory::Mild
        } else {
            Advisory::General
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Umbrella => "☔ Carry an umbrella",
            Advisory::Heat => "🥵 Stay hydrated and avoid sun",
            Advisory::Cold => "🧥 Wear warm clothes",
            Advisory::Outdoor => "😎 Great day for outdoor activities",
            Advisory::Mild => "☁️ Pleasant weather outside",
            Advisory::General => "✅ Have a great day!",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Suggestion text for a raw condition label.
pub fn advise_for(temperature_celsius: f64, condition: &str) -> &'static str {
    Advisory::evaluate(temperature_celsius, &WeatherCondition::from(condition)).message()
}
