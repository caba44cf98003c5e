//! Integration tests for the weather flow against mocked Open-Meteo endpoints.

use chrono::{Duration as Days, Local, NaiveDate};
use serde_json::json;
use std::sync::Arc;
use travel_mcp_server::{ReqwestFetcher, ServerConfig, ToolOutcome, WeatherReport, WeatherService};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(mock_server: &MockServer) -> WeatherService {
    let config = ServerConfig {
        geocoding_base_url: mock_server.uri(),
        archive_base_url: mock_server.uri(),
        forecast_base_url: mock_server.uri(),
        ..ServerConfig::default()
    };
    WeatherService::new(Arc::new(ReqwestFetcher::new().unwrap()), &config)
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

async fn mount_geocoding(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Kandy"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": "Kandy",
                "latitude": 7.2906,
                "longitude": 80.6337,
                "country": "Sri Lanka"
            }]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_far_future_date_is_estimated_without_forecast_call() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let today = Local::now().date_naive();
    let date = iso(today + Days::days(20));
    let outcome = service(&mock_server).report_on("Kandy", Some(&date), today).await;

    let ToolOutcome::Success(report) = outcome else {
        panic!("expected success, got {:?}", outcome);
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["data_type"], "estimated");
    assert_eq!(value["temperature_celsius"], json!({"max": 25, "min": 15}));
    assert_eq!(value["location"], "Kandy, Sri Lanka");
}

#[tokio::test]
async fn test_forecast_three_days_ahead() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server).await;

    let today = Local::now().date_naive();
    let date = iso(today + Days::days(3));

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("start_date", date.as_str()))
        .and(query_param("end_date", date.as_str()))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily": {
                "time": [date],
                "temperature_2m_max": [28.3],
                "temperature_2m_min": [20.1],
                "precipitation_sum": [3.4],
                "weather_code": [61],
                "wind_speed_10m_max": [9.7]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = service(&mock_server).report_on("Kandy", Some(&date), today).await;

    let ToolOutcome::Success(WeatherReport::Forecast(report)) = outcome else {
        panic!("expected forecast, got {:?}", outcome);
    };
    assert_eq!(report.conditions, "Slight rain");
    assert_eq!(report.wind_speed_max_kmh, Some(9.7));
}

#[tokio::test]
async fn test_historical_date_reads_archive() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server).await;

    let today = Local::now().date_naive();
    let date = iso(today - Days::days(10));

    Mock::given(method("GET"))
        .and(path("/archive"))
        .and(query_param("start_date", date.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily": {
                "time": [date],
                "temperature_2m_max": [30.0],
                "temperature_2m_min": [21.0],
                "temperature_2m_mean": [25.2],
                "precipitation_sum": [12.5],
                "weather_code": [63],
                "wind_speed_10m_max": [15.1]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = service(&mock_server).report_on("Kandy", Some(&date), today).await;

    let ToolOutcome::Success(report) = outcome else {
        panic!("expected success, got {:?}", outcome);
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["data_type"], "historical");
    assert_eq!(value["conditions"], "Moderate rain");
    assert_eq!(value["temperature_celsius"]["mean"], 25.2);
}

#[tokio::test]
async fn test_forecast_server_error_degrades_to_estimate() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let today = Local::now().date_naive();
    let date = iso(today + Days::days(1));
    let outcome = service(&mock_server).report_on("Kandy", Some(&date), today).await;

    assert!(outcome.is_degraded());
    let value = outcome.to_json().unwrap();
    assert_eq!(value["data_type"], "estimated");
    assert_eq!(value["location"], "Kandy");
    assert!(value["note"].as_str().unwrap().contains("503"));
    assert!(value.get("coordinates").is_none());
}

#[tokio::test]
async fn test_unknown_location_reports_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.4})))
        .mount(&mock_server)
        .await;

    let outcome = service(&mock_server).report("Atlantis", Some("2025-11-28")).await;

    assert_eq!(
        outcome.to_json().unwrap(),
        json!({"error": "Location 'Atlantis' not found", "location": "Atlantis"})
    );
}

#[tokio::test]
async fn test_missing_daily_block_reports_no_forecast() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"latitude": 7.3})))
        .mount(&mock_server)
        .await;

    let today = Local::now().date_naive();
    let date = iso(today);
    let outcome = service(&mock_server).report_on("Kandy", Some(&date), today).await;

    assert_eq!(
        outcome.to_json().unwrap(),
        json!({
            "error": format!("No forecast data available for date '{}'", date),
            "location": "Kandy",
            "date": date
        })
    );
}
