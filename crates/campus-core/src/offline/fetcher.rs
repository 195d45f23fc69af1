//! Network access for the caching layer.

use super::request::{CachedResponse, FetchRequest};
use crate::error::{CampusError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::debug;

/// Performs network requests on behalf of the worker.
///
/// An `Err` means the request never produced a response (connection refused,
/// DNS failure, ...). HTTP error statuses are successful fetches with a non-2xx
/// status.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse>;
}

/// [`Fetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse> {
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|e| {
            CampusError::Other(format!("Invalid HTTP method {}: {}", request.method, e))
        })?;

        debug!("Fetching {} {}", request.method, request.url);
        let response = self
            .client
            .request(method, request.url.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(CachedResponse {
            status,
            headers,
            body,
        })
    }
}
