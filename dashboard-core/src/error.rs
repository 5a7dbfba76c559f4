use thiserror::Error;

/// Everything that can go wrong between reading the city and having a report.
///
/// Display strings are user-facing; the CLI prints them as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Please enter a city name")]
    EmptyCity,

    #[error("No internet connection")]
    Connection(#[source] reqwest::Error),

    #[error("Request timed out. Try again.")]
    Timeout(#[source] reqwest::Error),

    /// Provider answered, but not with a 200 status and `cod`.
    #[error("API Error: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed weather data: {0}")]
    Parse(String),

    #[error("Unexpected error: {0}")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_connect() {
            FetchError::Connection(err)
        } else {
            FetchError::Http(err)
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FetchError::EmptyCity.to_string(), "Please enter a city name");

        let err = FetchError::Api { status: 404, message: "city not found".into() };
        assert_eq!(err.to_string(), "API Error: city not found");

        let err = FetchError::Parse("missing field `main`".into());
        assert!(err.to_string().starts_with("Malformed weather data"));
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Parse(_)));
    }
}
