//! HTTP transport
//!
//! The network-facing [`Transport`](crate::transport::Transport)
//! implementation: JSON over POST with retry, rate limiting and backoff.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Service Errors**: `__type`/`message` envelopes become typed errors
//! - **Signing**: Optional [`RequestSigner`](crate::transport::RequestSigner) hook

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
