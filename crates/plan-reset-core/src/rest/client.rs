//! PostgREST HTTP client
//!
//! Sends bulk updates to the backend's REST endpoint with API key auth.

use reqwest::{Client, StatusCode};
use tracing::{debug, error};
use url::Url;

use super::filter::Filter;
use super::patch::StatusPatch;
use super::transport::BulkUpdateTransport;
use crate::config::ResetConfig;
use crate::constants;
use crate::error::ResetError;

/// reqwest-backed [`BulkUpdateTransport`]
pub struct RestClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl RestClient {
    /// Create the HTTP client
    ///
    /// No request or connect timeout is set; the call waits as long as the
    /// backend takes.
    fn create_http_client() -> Client {
        Client::builder()
            .user_agent(constants::http::USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    /// Create a client for the collection named by `config`
    pub fn new(config: &ResetConfig) -> Result<Self, ResetError> {
        Ok(Self {
            http: Self::create_http_client(),
            endpoint: config.endpoint_url()?,
            api_key: config.api_key.clone(),
        })
    }

    /// Collection URL requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build a PATCH with the backend's auth and content headers
    fn build_patch(&self, filter: &Filter) -> reqwest::RequestBuilder {
        let (column, predicate) = filter.query_pair();

        self.http
            .patch(self.endpoint.clone())
            .query(&[(column, predicate.as_str())])
            .header("apikey", &self.api_key)
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .header("prefer", constants::http::PREFER_MINIMAL)
    }
}

#[async_trait::async_trait]
impl BulkUpdateTransport for RestClient {
    async fn submit(&self, filter: &Filter, patch: &StatusPatch) -> Result<StatusCode, ResetError> {
        let body = patch.to_json()?;
        debug!(endpoint = %self.endpoint, %filter, body = %body, "Submitting bulk update");

        let response = self.build_patch(filter).body(body).send().await?;
        let status = response.status();

        // Minimal return: whatever body came back is not inspected
        let _ = response.bytes().await;

        Ok(status)
    }
}
