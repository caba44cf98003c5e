//! MCP server exposing travel planning tools: nearby places and activities
//! from a local travel backend, per-user travel history, Open-Meteo weather
//! for a place and date, and trip date validation.

pub mod backend;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod formatters;
pub mod health;
pub mod models;
pub mod service;
pub mod validation;
pub mod weather;

pub use backend::{BackendClient, BackendLookup};
pub use config::ServerConfig;
pub use error::{FetchError, WeatherError};
pub use fetch::{JsonFetcher, ReqwestFetcher};
pub use models::{ToolFailure, ToolOutcome, WeatherReport};
pub use service::TravelTools;
pub use validation::{validate_future_date, validate_future_date_on};
pub use weather::WeatherService;
