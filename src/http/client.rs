//! HTTP transport for the Seed API
//!
//! Handles:
//! - Bearer token and client version headers
//! - Rate limiting to prevent API throttling
//! - Status checks and error classification
//!
//! Failed requests are never retried; the caller decides what to do.

use super::rate_limit::RateLimiter;
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Header carrying the configured client version
pub const CLIENT_VERSION_HEADER: &str = "Client-Version";

/// `reqwest`-backed [`Transport`]
pub struct HttpClient {
    client: Client,
    base_url: String,
    access_token: String,
    client_version: Option<String>,
    timeout: Duration,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a transport from a validated config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
            client_version: config.client_version.clone(),
            timeout: config.timeout(),
            rate_limiter: config.rate_limit.as_ref().map(RateLimiter::new),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String> {
        let url = self.build_url(path);

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .timeout(self.timeout);

        if let Some(ref version) = self.client_version {
            req = req.header(CLIENT_VERSION_HEADER, version.as_str());
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        debug!("GET {} ({} query params)", url, query.len());

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("GET {} failed with {}", url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        debug!("GET {} succeeded ({} bytes)", url, body.len());
        Ok(body)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("client_version", &self.client_version)
            .field("timeout", &self.timeout)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
