use thiserror::Error;

/// Failures while talking to a remote JSON API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or an unreadable body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    /// Body was JSON but not the expected shape
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

/// Failures that push `get_weather` onto its estimated fallback
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("time data '{input}' does not match format YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
