//! Weather lookups for a named place on a given day.
//!
//! The place is geocoded first, then the day offset from today picks the
//! Open-Meteo source: the archive for past days, the daily forecast up to
//! [`FORECAST_HORIZON_DAYS`] ahead, and a climate estimate beyond that.
//! Without a date the current conditions are reported.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::constants::{
    ESTIMATED_CONDITIONS, ESTIMATED_MAX_CELSIUS, ESTIMATED_MIN_CELSIUS,
    ESTIMATED_PRECIPITATION_MM, ESTIMATED_WIND_KMH, FORECAST_HORIZON_DAYS,
};
use crate::dates::{days_between, local_today, parse_iso_date};
use crate::error::{FetchError, WeatherError};
use crate::fetch::{fetch_as, JsonFetcher};
use crate::formatters::{describe_weather_code, format_location};
use crate::models::{
    Coordinates, CurrentResponse, CurrentWeather, DailyData, DailyResponse, DailyWeather,
    EstimatedTemperature, EstimatedWeather, GeocodingResponse, GeocodingResult, TemperatureRange,
    ToolFailure, ToolOutcome, WeatherReport,
};

const ARCHIVE_DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,temperature_2m_mean,precipitation_sum,weather_code,wind_speed_10m_max";
const FORECAST_DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,weather_code,wind_speed_10m_max";
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m";

/// Which data source serves a given day offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastWindow {
    Past,
    Forecast,
    BeyondForecast,
}

impl ForecastWindow {
    pub fn classify(days_ahead: i64) -> Self {
        if days_ahead > FORECAST_HORIZON_DAYS {
            Self::BeyondForecast
        } else if days_ahead < 0 {
            Self::Past
        } else {
            Self::Forecast
        }
    }
}

/// Geocodes places and fetches their weather from Open-Meteo
#[derive(Clone)]
pub struct WeatherService {
    fetcher: Arc<dyn JsonFetcher>,
    geocoding_base_url: String,
    archive_base_url: String,
    forecast_base_url: String,
    timeout: Duration,
    default_date: Option<String>,
}

impl WeatherService {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: &ServerConfig) -> Self {
        Self {
            fetcher,
            geocoding_base_url: config.geocoding_base_url.clone(),
            archive_base_url: config.archive_base_url.clone(),
            forecast_base_url: config.forecast_base_url.clone(),
            timeout: config.weather_timeout,
            default_date: config.default_weather_date.clone(),
        }
    }

    /// Weather for `location` relative to today's local date
    pub async fn report(&self, location: &str, date: Option<&str>) -> ToolOutcome<WeatherReport> {
        self.report_on(location, date, local_today()).await
    }

    /// Weather for `location`, measuring the date offset from `today`.
    ///
    /// Never fails: any error along the way turns into an estimated report
    /// wrapped in [`ToolOutcome::Degraded`].
    pub async fn report_on(
        &self,
        location: &str,
        date: Option<&str>,
        today: NaiveDate,
    ) -> ToolOutcome<WeatherReport> {
        let date = date
            .filter(|d| !d.is_empty())
            .or(self.default_date.as_deref());

        match self.try_report(location, date, today).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Weather lookup for {} failed, using estimate: {}", location, e);
                ToolOutcome::Degraded {
                    payload: WeatherReport::Estimated(estimate_after_failure(location, date, &e)),
                    cause: e.to_string(),
                }
            }
        }
    }

    async fn try_report(
        &self,
        location: &str,
        date: Option<&str>,
        today: NaiveDate,
    ) -> Result<ToolOutcome<WeatherReport>, WeatherError> {
        let Some(place) = self.geocode(location).await? else {
            tracing::info!("No geocoding match for {}", location);
            return Ok(ToolOutcome::Failed(ToolFailure::location_not_found(location)));
        };

        let Some(date) = date else {
            return Ok(ToolOutcome::Success(self.current(&place).await?));
        };

        let target = parse_iso_date(date).map_err(|source| WeatherError::InvalidDate {
            input: date.to_string(),
            source,
        })?;

        match ForecastWindow::classify(days_between(today, target)) {
            ForecastWindow::BeyondForecast => Ok(ToolOutcome::Success(WeatherReport::Estimated(
                estimate_beyond_forecast(&place, date),
            ))),
            ForecastWindow::Past => Ok(ToolOutcome::Success(self.historical(&place, date).await?)),
            ForecastWindow::Forecast => self.forecast(&place, location, date).await,
        }
    }

    /// Best geocoding match for a free-text place name
    pub async fn geocode(&self, location: &str) -> Result<Option<GeocodingResult>, FetchError> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.geocoding_base_url,
            urlencoding::encode(location)
        );

        let response: GeocodingResponse = fetch_as(self.fetcher.as_ref(), &url, self.timeout).await?;
        Ok(response.results.and_then(|results| results.into_iter().next()))
    }

    async fn historical(
        &self,
        place: &GeocodingResult,
        date: &str,
    ) -> Result<WeatherReport, WeatherError> {
        tracing::info!("Using Open-Meteo archive for {}", date);

        let url = format!(
            "{}/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily={}&timezone=auto",
            self.archive_base_url, place.latitude, place.longitude, date, date, ARCHIVE_DAILY_FIELDS
        );

        let response: DailyResponse = fetch_as(self.fetcher.as_ref(), &url, self.timeout).await?;
        let daily = response.daily.ok_or(FetchError::MissingField("daily"))?;

        let mean = daily
            .temperature_mean
            .as_deref()
            .ok_or(FetchError::MissingField("temperature_2m_mean"))?;
        let mean = first(mean, "temperature_2m_mean")?;

        Ok(WeatherReport::Historical(daily_weather(place, date, &daily, mean)?))
    }

    async fn forecast(
        &self,
        place: &GeocodingResult,
        location: &str,
        date: &str,
    ) -> Result<ToolOutcome<WeatherReport>, WeatherError> {
        tracing::info!("Using Open-Meteo forecast for {}", date);

        let url = format!(
            "{}/forecast?latitude={}&longitude={}&daily={}&start_date={}&end_date={}&timezone=auto",
            self.forecast_base_url, place.latitude, place.longitude, FORECAST_DAILY_FIELDS, date, date
        );

        let response: DailyResponse = fetch_as(self.fetcher.as_ref(), &url, self.timeout).await?;
        let daily = match response.daily {
            Some(daily) if !daily.time.is_empty() => daily,
            _ => {
                return Ok(ToolOutcome::Failed(ToolFailure::no_forecast_data(location, date)));
            }
        };

        Ok(ToolOutcome::Success(WeatherReport::Forecast(daily_weather(
            place, date, &daily, None,
        )?)))
    }

    async fn current(&self, place: &GeocodingResult) -> Result<WeatherReport, WeatherError> {
        tracing::info!("Using Open-Meteo current conditions");

        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&timezone=auto",
            self.forecast_base_url, place.latitude, place.longitude, CURRENT_FIELDS
        );

        let response: CurrentResponse = fetch_as(self.fetcher.as_ref(), &url, self.timeout).await?;
        let current = response.current;

        Ok(WeatherReport::Current(CurrentWeather {
            location: format_location(place),
            coordinates: coordinates(place),
            temperature_celsius: current.temperature,
            feels_like_celsius: current.apparent_temperature,
            humidity_percent: current.relative_humidity,
            precipitation_mm: current.precipitation,
            wind_speed_kmh: current.wind_speed,
            conditions: describe_weather_code(current.weather_code),
            time: current.time,
        }))
    }
}

fn coordinates(place: &GeocodingResult) -> Coordinates {
    Coordinates {
        latitude: place.latitude,
        longitude: place.longitude,
    }
}

/// First entry of a single-day series
fn first<T: Copy>(series: &[Option<T>], field: &'static str) -> Result<Option<T>, FetchError> {
    series.first().copied().ok_or(FetchError::MissingField(field))
}

fn daily_weather(
    place: &GeocodingResult,
    date: &str,
    daily: &DailyData,
    mean: Option<f64>,
) -> Result<DailyWeather, FetchError> {
    let code = first(&daily.weather_code, "weather_code")?;

    Ok(DailyWeather {
        location: format_location(place),
        coordinates: coordinates(place),
        date: date.to_string(),
        temperature_celsius: TemperatureRange {
            max: first(&daily.temperature_max, "temperature_2m_max")?,
            min: first(&daily.temperature_min, "temperature_2m_min")?,
            mean,
        },
        precipitation_mm: first(&daily.precipitation_sum, "precipitation_sum")?,
        wind_speed_max_kmh: first(&daily.wind_speed_max, "wind_speed_10m_max")?,
        conditions: describe_weather_code(code),
    })
}

fn estimated_climate() -> EstimatedTemperature {
    EstimatedTemperature {
        max: ESTIMATED_MAX_CELSIUS,
        min: ESTIMATED_MIN_CELSIUS,
    }
}

fn estimate_beyond_forecast(place: &GeocodingResult, date: &str) -> EstimatedWeather {
    EstimatedWeather {
        location: format_location(place),
        coordinates: Some(coordinates(place)),
        date: date.to_string(),
        temperature_celsius: estimated_climate(),
        precipitation_mm: ESTIMATED_PRECIPITATION_MM,
        wind_speed_max_kmh: ESTIMATED_WIND_KMH,
        conditions: ESTIMATED_CONDITIONS.to_string(),
        note: format!(
            "Forecast data is only available up to {} days. Showing estimated typical weather for this location.",
            FORECAST_HORIZON_DAYS
        ),
    }
}

fn estimate_after_failure(location: &str, date: Option<&str>, error: &WeatherError) -> EstimatedWeather {
    EstimatedWeather {
        location: location.to_string(),
        coordinates: None,
        date: date.unwrap_or("current").to_string(),
        temperature_celsius: estimated_climate(),
        precipitation_mm: ESTIMATED_PRECIPITATION_MM,
        wind_speed_max_kmh: ESTIMATED_WIND_KMH,
        conditions: ESTIMATED_CONDITIONS.to_string(),
        note: format!(
            "Could not fetch real weather data. Showing estimated typical weather. Error: {}",
            error
        ),
    }
}
