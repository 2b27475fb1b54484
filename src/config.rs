//! Client configuration
//!
//! `ClientConfig` can be built in code, loaded from YAML, and overridden
//! from the environment. Every section has serde defaults, so a YAML file
//! only needs the fields it changes.

use crate::error::{Error, Result};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the region
pub const REGION_ENV: &str = "AWS_REGION";

/// Environment variable overriding the endpoint (local emulators, proxies)
pub const ENDPOINT_ENV: &str = "COGNITO_IDP_ENDPOINT";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Region of the user pools (e.g. "eu-west-1")
    #[serde(default)]
    pub region: Option<String>,

    /// Explicit endpoint URL, overrides the regional one
    #[serde(default)]
    pub endpoint: Option<String>,

    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Pagination behaviour
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl ClientConfig {
    /// Config for a region with all other settings defaulted
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    /// Parse config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Apply `AWS_REGION` and `COGNITO_IDP_ENDPOINT` when set
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(region) = lookup(REGION_ENV).filter(|s| !s.is_empty()) {
            self.region = Some(region);
        }
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|s| !s.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        self
    }

    /// Resolve the endpoint URL
    ///
    /// An explicit `endpoint` wins; otherwise the regional endpoint is used.
    /// Only `http` and `https` endpoints are accepted.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = match (&self.endpoint, &self.region) {
            (Some(endpoint), _) => endpoint.clone(),
            (None, Some(region)) => format!("https://cognito-idp.{region}.amazonaws.com/"),
            (None, None) => return Err(Error::missing_field("region")),
        };
        let url = Url::parse(&raw)?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            scheme => Err(Error::config(format!(
                "endpoint {raw} must be an http(s) URL with a host, got scheme '{scheme}'"
            ))),
        }
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Rate limiting configuration, `None` disables it
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: None,
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_user_agent() -> String {
    format!("cognito-idp-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    20000
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests per second limit
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,

    /// Burst size (max tokens in bucket)
    #[serde(default = "default_rps")]
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_rps(),
            burst_size: default_rps(),
        }
    }
}

fn default_rps() -> u32 {
    10
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Pagination behaviour shared by every paginated request of a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Stop after this many pages even if the server offers more
    #[serde(default)]
    pub max_pages: Option<usize>,
}
