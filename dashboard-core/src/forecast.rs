//! Forecast extractor: raw forecast entries to a (timestamp, temperature) series.

use chrono::NaiveDateTime;

use crate::{
    error::FetchError,
    model::{ForecastEntry, ForecastSample},
};

/// Format of the provider's `dt_txt` field, e.g. `2024-06-01 15:00:00`.
pub const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert forecast entries to a series, keeping the provider's order.
///
/// An empty list yields an empty series. A timestamp that does not parse
/// means the payload was malformed and is reported as [`FetchError::Parse`].
pub fn extract_series(entries: &[ForecastEntry]) -> Result<Vec<ForecastSample>, FetchError> {
    entries
        .iter()
        .map(|entry| {
            let timestamp = NaiveDateTime::parse_from_str(&entry.dt_txt, DT_TXT_FORMAT)
                .map_err(|e| FetchError::Parse(format!("invalid dt_txt '{}': {e}", entry.dt_txt)))?;

            Ok(ForecastSample {
                timestamp,
                temperature_celsius: entry.main.temp,
            })
        })
        .collect()
}
