//! Client configuration
//!
//! Everything the transport needs to authenticate and reach the API lives
//! in a [`ClientConfig`] value that is passed to [`Client::new`](crate::Client::new).
//! There is no global client state.
//!
//! A config can be built in code or loaded from YAML:
//!
//! ```yaml
//! access_token: sk_live_...
//! client_version: "2024-01-01"
//! base_url: https://api.seed.co/v1/public
//! timeout_seconds: 30
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 5
//! ```

use crate::error::{Error, Result};
use crate::http::RateLimiterConfig;
use crate::types::API_BASE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable consulted when no access token is configured
pub const ACCESS_TOKEN_ENV: &str = "SEED_ACCESS_TOKEN";

/// Configuration for talking to the Seed API
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer token sent with every request
    #[serde(default)]
    pub access_token: String,

    /// Optional value for the `Client-Version` header
    #[serde(default)]
    pub client_version: Option<String>,

    /// Base URL for all requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Client-side rate limit; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_base_url() -> String {
    API_BASE.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("seed-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            client_version: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl ClientConfig {
    /// Create a config with the given token and defaults for everything else
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Create a new config builder
    pub fn builder(access_token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(access_token),
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Fill in the access token from `SEED_ACCESS_TOKEN` if none is set
    #[must_use]
    pub fn with_env_token(self) -> Self {
        self.fill_token(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    fn fill_token(mut self, token: Option<String>) -> Self {
        if self.access_token.is_empty() {
            if let Some(token) = token {
                self.access_token = token;
            }
        }
        self
    }

    /// Check that the config can be used to build a client
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(Error::missing_field("access_token"));
        }
        url::Url::parse(&self.base_url)?;
        if self.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "timeout_seconds",
                "must be greater than zero",
            ));
        }
        if let Some(rate) = &self.rate_limit {
            if rate.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "rate_limit.requests_per_second",
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.access_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("access_token", &token)
            .field("client_version", &self.client_version)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the client version header value
    pub fn client_version(mut self, version: impl Into<String>) -> Self {
        self.config.client_version = Some(version.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_seconds = timeout.as_secs().max(1);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Load a client config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Parse a client config from a YAML string
pub fn load_config_from_str(content: &str) -> Result<ClientConfig> {
    let config: ClientConfig = serde_yaml::from_str(content)?;
    Ok(config)
}
