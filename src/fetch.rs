//! Outbound HTTP seam.
//!
//! Every remote call the tools make goes through [`JsonFetcher`], so the
//! weather and backend logic can be driven by a stub in tests.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::constants::USER_AGENT;
use crate::error::FetchError;

/// Issues a single GET and returns the decoded JSON body
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, FetchError>;
}

/// Fetches a URL and deserializes the body into `T`
pub async fn fetch_as<T: DeserializeOwned>(
    fetcher: &dyn JsonFetcher,
    url: &str,
    timeout: Duration,
) -> Result<T, FetchError> {
    let value = fetcher.get_json(url, timeout).await?;
    Ok(serde_json::from_value(value)?)
}

/// [`JsonFetcher`] backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).timeout(timeout).send().await?;

        // Anything but a plain 200 counts as a failed call
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let data = response.json::<Value>().await?;
        Ok(data)
    }
}
