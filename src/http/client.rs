//! HTTP transport with retry and rate limiting
//!
//! Sends every request as a POST of the JSON body to the service endpoint
//! and handles:
//! - Automatic retries with configurable backoff
//! - Rate limiting to prevent API throttling
//! - Decoding of the service's JSON error envelope
//! - Optional request signing

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::request::Request;
use crate::transport::{RequestSigner, Transport};
use crate::types::{BackoffType, JsonValue};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Service endpoint every request is posted to
    pub endpoint: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers added to every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Config for `endpoint` with default settings
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(20),
            backoff_type: BackoffType::Exponential,
            rate_limit: None,
            default_headers: HashMap::new(),
            user_agent: format!("cognito-idp-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(endpoint: Url) -> HttpClientConfigBuilder {
        HttpClientConfigBuilder {
            config: Self::new(endpoint),
        }
    }

    /// Derive transport settings from a client config
    pub fn from_client_config(config: &ClientConfig) -> Result<Self> {
        let http = &config.http;
        let backoff = &http.retry_backoff;

        Ok(Self {
            endpoint: config.endpoint_url()?,
            timeout: http.timeout(),
            connect_timeout: http.connect_timeout(),
            max_retries: http.max_retries,
            initial_backoff: Duration::from_millis(backoff.initial_ms),
            max_backoff: Duration::from_millis(backoff.max_ms),
            backoff_type: backoff.backoff_type,
            rate_limit: http
                .rate_limit
                .as_ref()
                .map(|r| RateLimiterConfig::new(r.requests_per_second, r.burst_size)),
            default_headers: HashMap::new(),
            user_agent: http.user_agent.clone(),
        })
    }
}

/// Builder for HTTP client config
#[derive(Debug)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP transport with retry and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    signer: Option<Arc<dyn RequestSigner>>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .context("building HTTP client")?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            signer: None,
            rate_limiter,
        })
    }

    /// Create a client from a full client config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_config(HttpClientConfig::from_client_config(config)?)
    }

    /// Sign every outgoing request with `signer`
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// The endpoint requests are posted to
    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Send a request and decode its JSON response
    ///
    /// A success response with an empty body decodes to `{}`.
    pub async fn send(&self, request: &Request) -> Result<JsonValue> {
        let body = serde_json::to_vec(&request.body_json())?;
        let max_retries = self.config.max_retries;
        let action = request.action();

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self.client.post(self.config.endpoint.clone());

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }
            for (key, value) in request.headers() {
                req = req.header(key.as_str(), value.as_str());
            }

            // Signed per attempt, signatures are time-bound
            if let Some(ref signer) = self.signer {
                for (key, value) in signer.sign(request, &body)? {
                    req = req.header(key, value);
                }
            }

            req = req.body(body.clone());

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        debug!(action, status = status.as_u16(), "Request succeeded");
                        return decode_success(response).await;
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = extract_retry_after(&response);
                        if attempt < max_retries {
                            // Server hints are capped like our own backoff
                            let delay = retry_after.map_or_else(
                                || self.calculate_backoff(attempt),
                                |secs| Duration::from_secs(secs).min(self.config.max_backoff),
                            );
                            warn!(
                                "{} rate limited (429), attempt {}/{}, waiting {:?}",
                                action,
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(Error::RateLimited {
                            retry_after_seconds: retry_after.unwrap_or(0),
                        });
                    }

                    let text = response.text().await.unwrap_or_default();
                    let error = decode_error(status.as_u16(), &text);

                    if error.is_retryable() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "{} failed with {}, attempt {}/{}, retrying in {:?}",
                            action,
                            error,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(error);
                        continue;
                    }

                    return Err(error);
                }
                Err(e) => {
                    if e.is_timeout() {
                        let timeout_ms = self.config.timeout.as_millis() as u64;
                        if attempt < max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                "{} timed out, attempt {}/{}, retrying in {:?}",
                                action,
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::Timeout { timeout_ms });
                            continue;
                        }
                        return Err(Error::Timeout { timeout_ms });
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "{} connection error, attempt {}/{}, retrying in {:?}",
                            action,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        Err(last_error.unwrap_or(Error::MaxRetriesExceeded { max_retries }))
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: &Request) -> Result<JsonValue> {
        self.send(request).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

async fn decode_success(response: Response) -> Result<JsonValue> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode the `{"__type": ..., "message": ...}` error envelope
///
/// `__type` may carry a namespace prefix (`com.amazon...#UserNotFoundException`);
/// only the part after the last `#` is kept. Bodies without a type fall back
/// to a plain status error.
pub(crate) fn decode_error(status: u16, body: &str) -> Error {
    let Ok(JsonValue::Object(envelope)) = serde_json::from_str::<JsonValue>(body) else {
        return Error::http_status(status, body);
    };

    let Some(kind) = envelope.get("__type").and_then(JsonValue::as_str) else {
        return Error::http_status(status, body);
    };
    let code = kind.rsplit('#').next().unwrap_or(kind);

    let message = envelope
        .get("message")
        .or_else(|| envelope.get("Message"))
        .and_then(JsonValue::as_str)
        .unwrap_or_default();

    Error::service(status, code, message)
}

/// Extract retry-after header value in seconds
fn extract_retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
