//! Scripted in-memory transport for tests
//!
//! Responses are queued up front and handed out in order; every request the
//! transport receives is recorded so tests can inspect what was sent.

use crate::error::{Error, Result};
use crate::request::{PageSpec, Request};
use crate::transport::Transport;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<JsonValue>>,
    requests: Vec<Request>,
}

/// Transport that replays queued responses
///
/// Clones share the same script, so a test can keep a handle after moving
/// one into a client.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a successful response
    pub fn push_response(&self, response: JsonValue) -> &Self {
        self.script().responses.push_back(Ok(response));
        self
    }

    /// Queue a failure
    pub fn push_error(&self, error: Error) -> &Self {
        self.script().responses.push_back(Err(error));
        self
    }

    /// Queue one response per page, chaining them with tokens `tok1`, `tok2`, ...
    ///
    /// The last page carries no token.
    pub fn push_pages(&self, spec: PageSpec, pages: Vec<Vec<JsonValue>>) -> &Self {
        let count = pages.len();
        for (index, items) in pages.into_iter().enumerate() {
            let mut response = serde_json::Map::new();
            response.insert(spec.result_key.to_string(), JsonValue::Array(items));
            if index + 1 < count {
                response.insert(
                    spec.token_field.to_string(),
                    JsonValue::String(format!("tok{}", index + 1)),
                );
            }
            self.push_response(JsonValue::Object(response));
        }
        self
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<Request> {
        self.script().requests.clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.script().requests.len()
    }

    /// Number of queued responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.script().responses.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &Request) -> Result<JsonValue> {
        let mut script = self.script();
        script.requests.push(request.clone());
        script.responses.pop_front().unwrap_or_else(|| {
            Err(Error::Other(format!(
                "no scripted response left for {}",
                request.action()
            )))
        })
    }
}
