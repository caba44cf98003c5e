use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// Response of the archive and forecast endpoints when asked for `daily` data
#[derive(Debug, Deserialize)]
pub struct DailyResponse {
    #[serde(default)]
    pub daily: Option<DailyData>,
}

/// Single-day series; Open-Meteo reports gaps as `null`
#[derive(Debug, Deserialize)]
pub struct DailyData {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max", default)]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min", default)]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_mean", default)]
    pub temperature_mean: Option<Vec<Option<f64>>>,
    #[serde(default = "default_daily_weather_code")]
    pub weather_code: Vec<Option<i32>>,
    #[serde(rename = "wind_speed_10m_max", default)]
    pub wind_speed_max: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub current: CurrentData,
}

#[derive(Debug, Deserialize)]
/// Readings must be present but may be `null`
pub struct CurrentData {
    pub time: String,
    #[serde(rename = "temperature_2m", deserialize_with = "present_or_null")]
    pub temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m", deserialize_with = "present_or_null")]
    pub relative_humidity: Option<f64>,
    #[serde(deserialize_with = "present_or_null")]
    pub apparent_temperature: Option<f64>,
    #[serde(deserialize_with = "present_or_null")]
    pub precipitation: Option<f64>,
    #[serde(default = "default_weather_code")]
    pub weather_code: Option<i32>,
    #[serde(rename = "wind_speed_10m", deserialize_with = "present_or_null")]
    pub wind_speed: Option<f64>,
}

// With `deserialize_with` and no `default`, serde rejects a missing key
// instead of reading it as `None`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

// A response without a weather code reads as clear sky
fn default_weather_code() -> Option<i32> {
    Some(0)
}

fn default_daily_weather_code() -> Vec<Option<i32>> {
    vec![Some(0)]
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

fn unknown_location() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LocationRequest {
    #[schemars(description = "The designated location to search around (e.g., \"Kandy\")")]
    #[serde(default = "unknown_location")]
    pub location: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UserRequest {
    #[schemars(description = "The username to look up")]
    pub user: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    #[schemars(description = "City name or location (e.g., \"London\", \"Tokyo\")")]
    pub location: String,
    #[schemars(description = "Date in YYYY-MM-DD format. Omit for current conditions.")]
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ValidateDateRequest {
    #[schemars(description = "Date string in YYYY-MM-DD format (e.g., \"2025-12-25\")")]
    pub date: String,
}

// ============================================================================
// Tool Output Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRange {
    pub max: Option<f64>,
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

/// One day of archived or forecast weather
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWeather {
    pub location: String,
    pub coordinates: Coordinates,
    pub date: String,
    pub temperature_celsius: TemperatureRange,
    pub precipitation_mm: Option<f64>,
    pub wind_speed_max_kmh: Option<f64>,
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub location: String,
    pub coordinates: Coordinates,
    pub temperature_celsius: Option<f64>,
    pub feels_like_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub conditions: String,
    pub time: String,
}

/// Whole-degree range used by estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimatedTemperature {
    pub max: i64,
    pub min: i64,
}

/// Placeholder climate standing in for live data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatedWeather {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub date: String,
    pub temperature_celsius: EstimatedTemperature,
    pub precipitation_mm: i64,
    pub wind_speed_max_kmh: i64,
    pub conditions: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "data_type", rename_all = "snake_case")]
pub enum WeatherReport {
    Current(CurrentWeather),
    Historical(DailyWeather),
    Forecast(DailyWeather),
    Estimated(EstimatedWeather),
}

impl WeatherReport {
    pub fn data_type(&self) -> &'static str {
        match self {
            Self::Current(_) => "current",
            Self::Historical(_) => "historical",
            Self::Forecast(_) => "forecast",
            Self::Estimated(_) => "estimated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    PastDate,
    Today,
    TooFarFuture,
    Valid,
    InvalidFormat,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateValidation {
    pub valid: bool,
    pub status: ValidationStatus,
    pub message: String,
    pub input_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_difference: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_range_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_range_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_ahead: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_ahead: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub version: String,
}

// ============================================================================
// Tool Outcomes
// ============================================================================

/// Structured error handed back to the caller instead of data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFailure {
    pub error: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ToolFailure {
    pub fn location_not_found(location: &str) -> Self {
        Self {
            error: format!("Location '{}' not found", location),
            location: location.to_string(),
            date: None,
        }
    }

    pub fn no_forecast_data(location: &str, date: &str) -> Self {
        Self {
            error: format!("No forecast data available for date '{}'", date),
            location: location.to_string(),
            date: Some(date.to_string()),
        }
    }
}

/// What a tool produced: live data, fallback data substituted after a
/// failure, or a structured error.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome<T> {
    Success(T),
    Degraded { payload: T, cause: String },
    Failed(ToolFailure),
}

impl<T> ToolOutcome<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// The data carried by the outcome, live or substituted
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) | Self::Degraded { payload, .. } => Some(payload),
            Self::Failed(_) => None,
        }
    }
}

impl<T: Serialize> ToolOutcome<T> {
    /// Renders the caller-visible JSON; the outcome kind itself stays internal
    pub fn to_json(&self) -> serde_json::Result<Value> {
        match self {
            Self::Success(payload) | Self::Degraded { payload, .. } => {
                serde_json::to_value(payload)
            }
            Self::Failed(failure) => serde_json::to_value(failure),
        }
    }
}
