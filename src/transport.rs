//! Transport seam
//!
//! Everything that touches the network sits behind [`Transport`]. The
//! pagination engine and the client facade only see this trait, so tests
//! can drive them with a scripted transport and callers can plug in their
//! own stack.

use crate::error::Result;
use crate::request::Request;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::sync::Arc;

/// Executes one request and returns the decoded JSON response
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and decode the response body
    ///
    /// Retries, backoff, signing and error decoding all belong here; a
    /// returned error is final for this request.
    async fn execute(&self, request: &Request) -> Result<JsonValue>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: &Request) -> Result<JsonValue> {
        (**self).execute(request).await
    }
}

/// Adds authentication headers to an outgoing request
///
/// Receives the descriptor and the exact body bytes that will be sent and
/// returns extra headers. Signing algorithms live outside this crate.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &Request, body: &[u8]) -> Result<Vec<(String, String)>>;
}
