//! Condition classifier: maps a condition label to a display glyph.

use crate::model::WeatherCondition;

/// Glyph used for any label outside the known set.
pub const DEFAULT_ICON: &str = "🌍";

impl WeatherCondition {
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀️",
            WeatherCondition::Clouds => "☁️",
            WeatherCondition::Rain => "🌧️",
            WeatherCondition::Snow => "❄️",
            WeatherCondition::Thunderstorm => "⛈️",
            WeatherCondition::Drizzle => "🌦️",
            WeatherCondition::Mist
            | WeatherCondition::Smoke
            | WeatherCondition::Haze
            | WeatherCondition::Fog => "🌫️",
            WeatherCondition::Other(_) => DEFAULT_ICON,
        }
    }
}

/// Icon for a raw condition label. Unknown labels get [`DEFAULT_ICON`].
pub fn icon_for(condition: &str) -> &'static str {
    WeatherCondition::from(condition).icon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_condition_has_its_glyph() {
        let table = [
            ("Clear", "☀️"),
            ("Clouds", "☁️"),
            ("Rain", "🌧️"),
            ("Snow", "❄️"),
            ("Thunderstorm", "⛈️"),
            ("Drizzle", "🌦️"),
            ("Mist", "🌫️"),
            ("Smoke", "🌫️"),
            ("Haze", "🌫️"),
            ("Fog", "🌫️"),
        ];

        assert_eq!(table.len(), WeatherCondition::known().len());
        for (label, glyph) in table {
            assert_eq!(icon_for(label), glyph, "glyph for {label}");
        }
    }

    #[test]
    fn unknown_conditions_get_default_glyph() {
        for label in ["", "Tornado", "Squall", "clear", "CLOUDS", " Rain", "Ash"] {
            assert_eq!(icon_for(label), DEFAULT_ICON, "glyph for {label:?}");
        }
    }

    #[test]
    fn no_known_condition_uses_default_glyph() {
        for condition in WeatherCondition::known() {
            assert_ne!(condition.icon(), DEFAULT_ICON);
        }
    }
}
