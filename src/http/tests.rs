//! Tests for the HTTP transport

use super::*;
use crate::config::{ClientConfig, RateLimitConfig};
use crate::error::{Error, Result};
use crate::operations::{admin_get_user, list_users, ListUsersOptions};
use crate::request::Request;
use crate::transport::{RequestSigner, Transport};
use crate::types::BackoffType;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GET_USER_TARGET: &str = "AWSCognitoIdentityProviderService.AdminGetUser";

fn endpoint(server: &MockServer) -> Url {
    Url::parse(&server.uri()).unwrap()
}

fn fast_client(server: &MockServer, max_retries: u32) -> HttpClient {
    let config = HttpClientConfig::builder(endpoint(server))
        .max_retries(max_retries)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();
    HttpClient::with_config(config).unwrap()
}

fn backoff_client(backoff_type: BackoffType, max: Duration) -> HttpClient {
    let config = HttpClientConfig::builder(Url::parse("http://localhost/").unwrap())
        .backoff(backoff_type, Duration::from_millis(100), max)
        .build();
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_http_client_config_defaults() {
    let config = HttpClientConfig::new(Url::parse("https://example.com/").unwrap());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("cognito-idp-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder(Url::parse("https://example.com/").unwrap())
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .rate_limit(RateLimiterConfig::new(5, 5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert!(config.rate_limit.is_some());
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_from_client_config() {
    let mut config = ClientConfig::for_region("eu-west-1");
    config.http.max_retries = 7;
    config.http.rate_limit = Some(RateLimitConfig {
        requests_per_second: 3,
        burst_size: 6,
    });

    let client = HttpClient::from_config(&config).unwrap();

    assert_eq!(
        client.endpoint().as_str(),
        "https://cognito-idp.eu-west-1.amazonaws.com/"
    );
    assert!(client.has_rate_limiter());
}

#[test]
fn test_from_client_config_without_region_fails() {
    let err = HttpClient::from_config(&ClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "region"));
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_posts_json_with_target_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", GET_USER_TARGET))
        .and(header("content-type", "application/x-amz-json-1.1"))
        .and(body_json(json!({"UserPoolId": "pool1", "Username": "alice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Username": "alice",
            "UserAttributes": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server, 0);
    let response = client
        .execute(&admin_get_user("pool1", "alice"))
        .await
        .unwrap();

    assert_eq!(response["Username"], "alice");
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-trace-id", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder(endpoint(&server))
        .header("x-trace-id", "abc123")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client.send(&admin_get_user("p", "u")).await.unwrap();
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = fast_client(&server, 0);
    let response = client
        .send(&crate::operations::admin_delete_user("pool1", "alice"))
        .await
        .unwrap();

    assert_eq!(response, json!({}));
}

#[tokio::test]
async fn test_paginated_request_body_is_sent_as_is() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "UserPoolId": "pool1",
            "Limit": 5,
            "PaginationToken": "tok1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Users": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListUsersOptions {
        limit: Some(5),
        ..Default::default()
    };
    let request = list_users("pool1", options).with_field("PaginationToken", "tok1");

    let client = fast_client(&server, 0);
    assert_eq!(client.send(&request).await.unwrap(), json!({"Users": []}));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_service_error_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "com.amazonaws.cognito#UserNotFoundException",
            "message": "User does not exist."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server, 3);
    let err = client
        .send(&admin_get_user("pool1", "ghost"))
        .await
        .unwrap_err();

    match err {
        Error::Service {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "UserNotFoundException");
            assert_eq!(message, "User does not exist.");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_envelope_error_is_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let client = fast_client(&server, 0);
    let err = client.send(&admin_get_user("p", "u")).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 403, ref body } if body == "Forbidden"));
}

#[tokio::test]
async fn test_retry_on_500() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = fast_client(&server, 3);
    let response = client.send(&admin_get_user("p", "u")).await.unwrap();

    assert_eq!(response, json!({"ok": true}));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_throttling_code_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "TooManyRequestsException",
            "message": "Rate exceeded"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Username": "u"})))
        .mount(&server)
        .await;

    let client = fast_client(&server, 1);
    let response = client.send(&admin_get_user("p", "u")).await.unwrap();

    assert_eq!(response["Username"], "u");
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Unavailable"))
        .mount(&server)
        .await;

    let client = fast_client(&server, 2);
    let err = client.send(&admin_get_user("p", "u")).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_429_retry_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = fast_client(&server, 2);
    assert_eq!(
        client.send(&admin_get_user("p", "u")).await.unwrap(),
        json!({"ok": true})
    );
}

#[tokio::test]
async fn test_429_retry_after_is_capped_by_max_backoff() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "86400"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder(endpoint(&server))
        .max_retries(1)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_millis(50),
        )
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = tokio::time::timeout(
        Duration::from_secs(5),
        client.send(&admin_get_user("p", "u")),
    )
    .await
    .expect("retry-after should be capped at max_backoff");
    assert_eq!(response.unwrap(), json!({"ok": true}));
}

#[tokio::test]
async fn test_429_without_retries_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server, 0);
    let err = client.send(&admin_get_user("p", "u")).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
    assert!(err.is_retryable());
}

// ============================================================================
// Signing
// ============================================================================

struct StaticSigner;

impl RequestSigner for StaticSigner {
    fn sign(&self, request: &Request, body: &[u8]) -> Result<Vec<(String, String)>> {
        Ok(vec![(
            "authorization".to_string(),
            format!("TEST {} {}", request.action(), body.len()),
        )])
    }
}

struct BrokenSigner;

impl RequestSigner for BrokenSigner {
    fn sign(&self, _request: &Request, _body: &[u8]) -> Result<Vec<(String, String)>> {
        Err(Error::signing("no credentials"))
    }
}

#[tokio::test]
async fn test_signer_headers_are_added() {
    let server = MockServer::start().await;
    let request = admin_get_user("pool1", "alice");
    let body_len = serde_json::to_vec(&request.body_json()).unwrap().len();

    Mock::given(method("POST"))
        .and(header(
            "authorization",
            format!("TEST AdminGetUser {body_len}").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server, 0).with_signer(Arc::new(StaticSigner));
    client.send(&request).await.unwrap();
}

#[tokio::test]
async fn test_signing_failure_sends_nothing() {
    let server = MockServer::start().await;

    let client = fast_client(&server, 3).with_signer(Arc::new(BrokenSigner));
    let err = client.send(&admin_get_user("p", "u")).await.unwrap_err();

    assert!(matches!(err, Error::Signing { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Backoff
// ============================================================================

#[test]
fn test_calculate_backoff_constant() {
    let client = backoff_client(BackoffType::Constant, Duration::from_secs(10));

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_linear() {
    let client = backoff_client(BackoffType::Linear, Duration::from_secs(10));

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(300));
}

#[test]
fn test_calculate_backoff_exponential() {
    let client = backoff_client(BackoffType::Exponential, Duration::from_secs(10));

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(3), Duration::from_millis(800));
}

#[test]
fn test_calculate_backoff_respects_max() {
    let client = backoff_client(BackoffType::Exponential, Duration::from_millis(500));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
    assert_eq!(client.calculate_backoff(40), Duration::from_millis(500));
}

#[test]
fn test_http_client_debug() {
    let client = backoff_client(BackoffType::Constant, Duration::from_secs(1));
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("has_signer: false"));
}
