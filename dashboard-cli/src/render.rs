//! Human-friendly text output for a [`WeatherReport`].

use std::fmt::Write;

use dashboard_core::{ForecastSample, WeatherReport};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Rows shown in the forecast table.
    pub rows: usize,
    pub show_forecast: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rows: 10,
            show_forecast: true,
        }
    }
}

pub fn render_report(report: &WeatherReport, opts: RenderOptions) -> String {
    let obs = &report.observation;
    let mut out = String::new();

    let _ = writeln!(out, "{} {}, {}", report.icon, obs.city_name, obs.country_code);
    let _ = writeln!(out, "Condition: {}", obs.description_title());
    out.push('\n');
    let _ = writeln!(
        out,
        "🌡️ Temperature: {:.1} °C   💧 Humidity: {}%   🌬️ Wind Speed: {:.1} m/s",
        obs.temperature_celsius, obs.humidity_percent, obs.wind_speed_mps
    );
    out.push('\n');
    let _ = writeln!(out, "💡 Suggestion: {}", report.advisory);
    out.push('\n');
    let _ = writeln!(out, "📊 More Details");
    let _ = writeln!(out, "  Feels Like: {:.1} °C", obs.feels_like_celsius);
    let _ = writeln!(out, "  Pressure: {} hPa", obs.pressure_hpa);

    if opts.show_forecast {
        out.push('\n');
        out.push_str(&render_forecast(&report.forecast, opts.rows));
    }

    out
}

/// Chart of the whole series followed by a table of its first `rows` entries.
pub fn render_forecast(series: &[ForecastSample], rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📈 Temperature Forecast");

    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        let _ = writeln!(out, "  No forecast data available.");
        return out;
    };

    let temps: Vec<f64> = series.iter().map(|s| s.temperature_celsius).collect();
    let (min, max) = min_max(&temps);
    let _ = writeln!(out, "  {}", sparkline(&temps));
    let _ = writeln!(
        out,
        "  {} .. {}   min {min:.1} °C / max {max:.1} °C",
        first.timestamp.format("%d %b %H:%M"),
        last.timestamp.format("%d %b %H:%M"),
    );
    out.push('\n');

    let _ = writeln!(out, "  {:<18} {:>8}", "Time", "Temp °C");
    for sample in series.iter().take(rows) {
        let _ = writeln!(
            out,
            "  {:<18} {:>8.1}",
            sample.timestamp.format("%a %d %b %H:%M").to_string(),
            sample.temperature_celsius
        );
    }

    if series.len() > rows {
        let _ = writeln!(out, "  ({} more)", series.len() - rows);
    }

    out
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// One block character per value, scaled between the series min and max.
pub fn sparkline(values: &[f64]) -> String {
    let (min, max) = min_max(values);
    let range = max - min;
    let top = (SPARK_LEVELS.len() - 1) as f64;

    values
        .iter()
        .map(|&v| {
            if range <= f64::EPSILON {
                SPARK_LEVELS[SPARK_LEVELS.len() / 2]
            } else {
                let level = ((v - min) / range * top).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_core::{CurrentObservation, WeatherCondition};

    fn sample(hour: u32, temp: f64) -> ForecastSample {
        ForecastSample {
            timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature_celsius: temp,
        }
    }

    fn report(forecast: Vec<ForecastSample>) -> WeatherReport {
        WeatherReport::assemble(
            CurrentObservation {
                city_name: "Bengaluru".into(),
                country_code: "IN".into(),
                temperature_celsius: 38.0,
                feels_like_celsius: 40.4,
                humidity_percent: 20,
                pressure_hpa: 1005,
                wind_speed_mps: 1.5,
                condition: WeatherCondition::Clear,
                description: "clear sky".into(),
            },
            forecast,
        )
    }

    #[test]
    fn sparkline_spans_lowest_to_highest_block() {
        assert_eq!(sparkline(&[0.0, 7.0]), "▁█");
        assert_eq!(sparkline(&[10.0, 10.0, 10.0]), "▅▅▅");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn report_shows_header_metrics_and_advice() {
        let text = render_report(&report(Vec::new()), RenderOptions::default());

        assert!(text.starts_with("☀️ Bengaluru, IN\n"));
        assert!(text.contains("Condition: Clear Sky"));
        assert!(text.contains("Temperature: 38.0 °C"));
        assert!(text.contains("Humidity: 20%"));
        assert!(text.contains("💡 Suggestion: 🥵 Stay hydrated and avoid sun"));
        assert!(text.contains("Feels Like: 40.4 °C"));
        assert!(text.contains("Pressure: 1005 hPa"));
        assert!(text.contains("No forecast data available."));
    }

    #[test]
    fn forecast_can_be_hidden() {
        let opts = RenderOptions {
            show_forecast: false,
            ..Default::default()
        };
        let text = render_report(&report(vec![sample(12, 30.0)]), opts);

        assert!(!text.contains("Temperature Forecast"));
    }

    #[test]
    fn table_is_truncated_to_rows() {
        let series: Vec<ForecastSample> = (0..8).map(|h| sample(h * 3, 20.0 + h as f64)).collect();
        let text = render_forecast(&series, 3);

        let table_rows = text.lines().filter(|l| l.contains("Jun")).count();
        // Three table rows plus the chart's range line.
        assert_eq!(table_rows, 4);
        assert!(text.contains("(5 more)"));
        assert!(text.contains("min 20.0 °C / max 27.0 °C"));
    }

    #[test]
    fn table_keeps_series_order() {
        let series = vec![sample(15, 25.0), sample(9, 18.0)];
        let text = render_forecast(&series, 10);

        let first = text.find("15:00").unwrap();
        let second = text.rfind("09:00").unwrap();
        assert!(first < second);
        assert!(!text.contains("more)"));
    }
}
