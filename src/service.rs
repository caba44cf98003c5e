use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Serialize;
use std::sync::Arc;

use crate::backend::{BackendClient, BackendLookup};
use crate::config::ServerConfig;
use crate::fetch::{JsonFetcher, ReqwestFetcher};
use crate::health::health_status;
use crate::models::{
    GetWeatherRequest, LocationRequest, ToolOutcome, UserRequest, ValidateDateRequest,
};
use crate::validation::validate_future_date;
use crate::weather::WeatherService;

/// MCP server exposing the travel planning tools
#[derive(Clone)]
pub struct TravelTools {
    backend: BackendClient,
    weather: WeatherService,
    tool_router: ToolRouter<Self>,
}

impl TravelTools {
    /// Creates the server with a `reqwest` client for all outbound calls
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let fetcher = ReqwestFetcher::new()?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: &ServerConfig, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            backend: BackendClient::new(fetcher.clone(), config),
            weather: WeatherService::new(fetcher, config),
            tool_router: Self::tool_router(),
        }
    }

    async fn backend_lookup(
        &self,
        lookup: BackendLookup,
        input: &str,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.backend.lookup(lookup, input).await;
        render_outcome(&outcome)
    }
}

/// Renders a tool outcome as a single JSON text block
fn render_outcome<T: Serialize>(outcome: &ToolOutcome<T>) -> Result<CallToolResult, McpError> {
    let value = outcome.to_json().map_err(|e| {
        McpError::internal_error(format!("Failed to serialize result: {}", e), None)
    })?;
    render_json(&value)
}

fn render_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize result: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_handler]
impl ServerHandler for TravelTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "travel-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Travel planning tools: nearby places and activities, a user's travel history, \
                weather for a place and date (powered by Open-Meteo), and trip date validation."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl TravelTools {
    /// Gathers places near a location and their activities
    #[tool(description = "Gather nearby locations and their activities for a designated location (e.g., 'Kandy').")]
    async fn get_nearby_location_activities(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting nearby activities for location: {}", request.location);
        self.backend_lookup(BackendLookup::NearbyActivities, &request.location).await
    }

    /// Lists attractions around a designated location
    #[tool(description = "Get all locations near a designated location (e.g., 'Kandy'), with descriptions including budget and suitability details.")]
    async fn get_all_location_for_designation(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting locations for designation: {}", request.location);
        self.backend_lookup(BackendLookup::LocationsForDesignation, &request.location).await
    }

    #[tool(description = "Get past activities for a given user, with date and budget information.")]
    async fn get_past_activities(
        &self,
        Parameters(request): Parameters<UserRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting past activities for user: {}", request.user);
        self.backend_lookup(BackendLookup::PastActivities, &request.user).await
    }

    #[tool(description = "Get past visited locations for a given user, with date and group size information.")]
    async fn get_past_locations(
        &self,
        Parameters(request): Parameters<UserRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting past locations for user: {}", request.user);
        self.backend_lookup(BackendLookup::PastLocations, &request.user).await
    }

    /// Gets weather for a place on a given day
    #[tool(description = "Get weather for a location (e.g., 'London', 'Tokyo') and optional date in YYYY-MM-DD format using Open-Meteo. Without a date returns current conditions; past dates return historical data; dates up to 16 days ahead return forecast data; later dates return an estimate.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting weather for location: {}, date: {}",
            request.location,
            request.date.as_deref().unwrap_or("current")
        );

        let outcome = self
            .weather
            .report(&request.location, request.date.as_deref())
            .await;
        if let Some(report) = outcome.payload() {
            tracing::info!(
                "Weather for {} served as {} data (fallback: {})",
                request.location,
                report.data_type(),
                outcome.is_degraded()
            );
        }
        render_outcome(&outcome)
    }

    /// Validates a trip date against the six-month window
    #[tool(description = "Validate that a date (YYYY-MM-DD) is in the future and within the next 6 months from today.")]
    async fn validate_future_date(
        &self,
        Parameters(request): Parameters<ValidateDateRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Validating date: {}", request.date);
        render_json(&validate_future_date(&request.date))
    }

    #[tool(description = "Report the health status and version of the travel tools server.")]
    async fn health_check(&self) -> Result<CallToolResult, McpError> {
        render_json(&health_status())
    }
}
