//! Tools backed by the local travel API.
//!
//! Each lookup is a single GET; whatever goes wrong, the caller receives
//! sample data instead of an error.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::fallback;
use crate::fetch::JsonFetcher;
use crate::models::ToolOutcome;

/// The backend lookups exposed as tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendLookup {
    NearbyActivities,
    LocationsForDesignation,
    PastActivities,
    PastLocations,
}

impl BackendLookup {
    /// Endpoint path and the query parameter carrying the input
    fn route(self) -> (&'static str, &'static str) {
        match self {
            Self::NearbyActivities | Self::LocationsForDesignation => ("/api/location", "location"),
            Self::PastActivities => ("/api/activities", "user"),
            Self::PastLocations => ("/api/locations", "user"),
        }
    }

    pub fn url(self, base_url: &str, input: &str) -> String {
        let (path, param) = self.route();
        format!("{}{}?{}={}", base_url, path, param, urlencoding::encode(input))
    }

    /// Sample data substituted when the backend call fails
    pub fn fallback(self, input: &str) -> Value {
        match self {
            Self::NearbyActivities if fallback::is_sample_location(input) => {
                fallback::kandy_nearby_activities()
            }
            Self::NearbyActivities => fallback::generic_nearby_activities(input),
            Self::LocationsForDesignation if fallback::is_sample_location(input) => {
                fallback::kandy_designation_locations()
            }
            Self::LocationsForDesignation => fallback::generic_designation_locations(input),
            Self::PastActivities => fallback::sample_past_activities(),
            Self::PastLocations => fallback::sample_past_locations(),
        }
    }
}

/// Client for the local travel backend
#[derive(Clone)]
pub struct BackendClient {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: &ServerConfig) -> Self {
        Self {
            fetcher,
            base_url: config.backend_base_url.clone(),
            timeout: config.backend_timeout,
        }
    }

    /// Runs a lookup, returning the backend body verbatim or sample data
    pub async fn lookup(&self, lookup: BackendLookup, input: &str) -> ToolOutcome<Value> {
        let url = lookup.url(&self.base_url, input);

        match self.fetcher.get_json(&url, self.timeout).await {
            Ok(body) => ToolOutcome::Success(body),
            Err(e) => {
                tracing::warn!("Backend lookup {:?} failed, using sample data: {}", lookup, e);
                ToolOutcome::Degraded {
                    payload: lookup.fallback(input),
                    cause: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubFetcher;
    use serde_json::json;

    fn client(fetcher: StubFetcher) -> BackendClient {
        let config = ServerConfig {
            backend_base_url: "http://backend.test".to_string(),
            ..ServerConfig::default()
        };
        BackendClient::new(Arc::new(fetcher), &config)
    }

    #[test]
    fn test_urls_encode_input() {
        assert_eq!(
            BackendLookup::NearbyActivities.url("http://localhost:3000", "Nuwara Eliya"),
            "http://localhost:3000/api/location?location=Nuwara%20Eliya"
        );
        assert_eq!(
            BackendLookup::PastActivities.url("http://localhost:3000", "a&b"),
            "http://localhost:3000/api/activities?user=a%26b"
        );
        assert_eq!(
            BackendLookup::PastLocations.url("http://localhost:3000", "kasun"),
            "http://localhost:3000/api/locations?user=kasun"
        );
    }

    #[tokio::test]
    async fn test_success_returns_body_verbatim() {
        let body = json!([{"name": "Sigiriya", "distance_km": 3.5}]);
        let backend = client(StubFetcher::new().respond("/api/location?location=Dambulla", body.clone()));

        let outcome = backend.lookup(BackendLookup::NearbyActivities, "Dambulla").await;

        assert_eq!(outcome, ToolOutcome::Success(body));
    }

    #[tokio::test]
    async fn test_failure_for_sample_location_uses_dataset() {
        let backend = client(StubFetcher::new().fail("/api/location", 503));

        let outcome = backend.lookup(BackendLookup::LocationsForDesignation, "Kandy").await;

        assert!(outcome.is_degraded());
        let payload = outcome.payload().unwrap();
        assert_eq!(payload.as_array().unwrap().len(), 12);
        assert_eq!(
            payload[0]["location"],
            "Temple of the Tooth Relic (Sri Dalada Maligawa)"
        );
    }

    #[tokio::test]
    async fn test_failure_for_other_location_echoes_input() {
        let backend = client(StubFetcher::new());

        let outcome = backend.lookup(BackendLookup::NearbyActivities, "Nowhere").await;

        match outcome {
            ToolOutcome::Degraded { payload, cause } => {
                assert_eq!(
                    payload,
                    json!([{"message": "Think nearby locations by yourself", "location": "Nowhere"}])
                );
                assert!(cause.contains("404"));
            }
            other => panic!("expected degraded outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_user_lookups_ignore_user_on_failure() {
        let backend = client(StubFetcher::new().fail("/api/", 500));

        let activities = backend.lookup(BackendLookup::PastActivities, "anyone").await;
        let locations = backend.lookup(BackendLookup::PastLocations, "anyone").await;

        assert_eq!(activities.payload(), Some(&fallback::sample_past_activities()));
        assert_eq!(locations.payload(), Some(&fallback::sample_past_locations()));
    }
}
