//! Server configuration.
//!
//! Every setting can be overridden through an environment variable; anything
//! unset or unparsable falls back to the built-in default.

use std::env;
use std::time::Duration;

use crate::constants::{
    BACKEND_TIMEOUT_SECS, OPEN_METEO_API_BASE, OPEN_METEO_ARCHIVE_BASE,
    OPEN_METEO_GEOCODING_BASE, TRAVEL_BACKEND_BASE, WEATHER_TIMEOUT_SECS,
};

/// Endpoints and timeouts used by the tool server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub backend_base_url: String,
    pub geocoding_base_url: String,
    pub archive_base_url: String,
    pub forecast_base_url: String,
    pub backend_timeout: Duration,
    pub weather_timeout: Duration,
    /// Date used by `get_weather` when the caller supplies none.
    /// When unset, a missing date means current conditions.
    pub default_weather_date: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend_base_url: TRAVEL_BACKEND_BASE.to_string(),
            geocoding_base_url: OPEN_METEO_GEOCODING_BASE.to_string(),
            archive_base_url: OPEN_METEO_ARCHIVE_BASE.to_string(),
            forecast_base_url: OPEN_METEO_API_BASE.to_string(),
            backend_timeout: Duration::from_secs(BACKEND_TIMEOUT_SECS),
            weather_timeout: Duration::from_secs(WEATHER_TIMEOUT_SECS),
            default_weather_date: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend_timeout_secs = env::var("TRAVEL_BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(BACKEND_TIMEOUT_SECS);

        let weather_timeout_secs = env::var("WEATHER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(WEATHER_TIMEOUT_SECS);

        let default_weather_date = env::var("WEATHER_DEFAULT_DATE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            backend_base_url: url_var("TRAVEL_BACKEND_URL", defaults.backend_base_url),
            geocoding_base_url: url_var("OPEN_METEO_GEOCODING_URL", defaults.geocoding_base_url),
            archive_base_url: url_var("OPEN_METEO_ARCHIVE_URL", defaults.archive_base_url),
            forecast_base_url: url_var("OPEN_METEO_FORECAST_URL", defaults.forecast_base_url),
            backend_timeout: Duration::from_secs(backend_timeout_secs),
            weather_timeout: Duration::from_secs(weather_timeout_secs),
            default_weather_date,
        }
    }
}

/// Reads a base URL, dropping any trailing slash so paths can be appended
fn url_var(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_endpoints() {
        let config = ServerConfig::default();

        assert_eq!(config.backend_base_url, "http://localhost:3000");
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.backend_timeout, Duration::from_secs(5));
        assert_eq!(config.weather_timeout, Duration::from_secs(10));
        assert!(config.default_weather_date.is_none());
    }

    #[test]
    fn test_url_var_falls_back_when_unset() {
        let value = url_var(
            "TRAVEL_MCP_SERVER_TEST_UNSET_URL",
            "http://fallback".to_string(),
        );
        assert_eq!(value, "http://fallback");
    }
}
