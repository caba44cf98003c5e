/// User agent string for HTTP requests
pub const USER_AGENT: &str = "travel-mcp-server/0.1.0";

/// Local travel backend base URL
pub const TRAVEL_BACKEND_BASE: &str = "http://localhost:3000";

/// Open-Meteo geocoding API base URL
pub const OPEN_METEO_GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo historical archive API base URL
pub const OPEN_METEO_ARCHIVE_BASE: &str = "https://archive-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

pub const BACKEND_TIMEOUT_SECS: u64 = 5;
pub const WEATHER_TIMEOUT_SECS: u64 = 10;

/// Furthest day ahead Open-Meteo serves a daily forecast for
pub const FORECAST_HORIZON_DAYS: i64 = 16;

/// Furthest day ahead a trip date is accepted (roughly six months)
pub const FUTURE_WINDOW_DAYS: i64 = 180;

/// Calendar date format used on every tool boundary
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Placeholder climate used whenever live weather is unavailable
pub const ESTIMATED_MAX_CELSIUS: i64 = 25;
pub const ESTIMATED_MIN_CELSIUS: i64 = 15;
pub const ESTIMATED_PRECIPITATION_MM: i64 = 0;
pub const ESTIMATED_WIND_KMH: i64 = 10;
pub const ESTIMATED_CONDITIONS: &str = "Partly cloudy";

pub const HEALTH_SERVICE_NAME: &str = "travel-mcp-server";
