//! Request descriptors
//!
//! A [`Request`] is the immutable description of one remote call: the
//! action, its JSON body and the protocol headers. List operations also
//! carry a [`PageSpec`] telling the paginator where results and the
//! continuation token live.

use crate::normalize::normalize;
use crate::types::{JsonObject, JsonValue};
use serde::Serialize;

/// Service identifier used by signers and for logging
pub const SERVICE: &str = "cognito-idp";

/// Namespace prefix of the `x-amz-target` routing header
pub const TARGET_NAMESPACE: &str = "AWSCognitoIdentityProviderService";

/// Content type of every request body
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Routing header name
pub const TARGET_HEADER: &str = "x-amz-target";

/// Where a list operation puts its results and continuation token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// Response field holding the page's items (e.g. `Users`)
    pub result_key: &'static str,
    /// Field echoed between response and next request (e.g. `PaginationToken`)
    pub token_field: &'static str,
}

impl PageSpec {
    /// Results under `result_key`, continuation in `PaginationToken`
    pub const fn pagination_token(result_key: &'static str) -> Self {
        Self {
            result_key,
            token_field: "PaginationToken",
        }
    }

    /// Results under `result_key`, continuation in `NextToken`
    pub const fn next_token(result_key: &'static str) -> Self {
        Self {
            result_key,
            token_field: "NextToken",
        }
    }
}

/// One remote call, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    service: &'static str,
    action: &'static str,
    body: JsonObject,
    headers: Vec<(String, String)>,
    pagination: Option<PageSpec>,
}

impl Request {
    /// Create a one-shot request
    pub fn new(action: &'static str, body: JsonObject) -> Self {
        Self {
            service: SERVICE,
            action,
            body,
            headers: vec![
                (
                    TARGET_HEADER.to_string(),
                    format!("{TARGET_NAMESPACE}.{action}"),
                ),
                ("content-type".to_string(), CONTENT_TYPE.to_string()),
            ],
            pagination: None,
        }
    }

    /// Create a request that can also be materialized as a paginated sequence
    pub fn paginated(action: &'static str, body: JsonObject, page: PageSpec) -> Self {
        Self {
            pagination: Some(page),
            ..Self::new(action, body)
        }
    }

    /// Derive a new request with one body field set (or replaced)
    #[must_use]
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let mut next = self.clone();
        next.body.insert(key.into(), value.into());
        next
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn body(&self) -> &JsonObject {
        &self.body
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn pagination(&self) -> Option<PageSpec> {
        self.pagination
    }

    pub fn is_paginated(&self) -> bool {
        self.pagination.is_some()
    }

    /// Body serialized as the wire JSON document
    pub fn body_json(&self) -> JsonValue {
        JsonValue::Object(self.body.clone())
    }
}

// ============================================================================
// Body assembly
// ============================================================================

/// Collects snake_case fields for a request body, then normalizes them
///
/// Free-form maps whose keys are caller data (`ClientMetadata`,
/// `ChallengeResponses`, ...) go in through [`Body::literal`] and are added
/// after normalization so their keys reach the wire untouched.
#[derive(Debug, Default)]
pub(crate) struct Body {
    fields: JsonObject,
    literals: JsonObject,
}

impl Body {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a required argument under its snake_case name
    pub(crate) fn field(mut self, key: &str, value: impl Serialize) -> Self {
        if let Some(value) = to_json(value) {
            self.fields.insert(key.to_string(), value);
        }
        self
    }

    /// Merge every set field of an options struct
    pub(crate) fn options(mut self, options: &impl Serialize) -> Self {
        if let Some(JsonValue::Object(map)) = to_json(options) {
            self.fields.extend(map);
        }
        self
    }

    /// Add a wire-exact field, skipped when the map is empty
    pub(crate) fn literal<V: Serialize>(
        mut self,
        wire_key: &str,
        map: &std::collections::HashMap<String, V>,
    ) -> Self {
        if !map.is_empty() {
            if let Some(value) = to_json(map) {
                self.literals.insert(wire_key.to_string(), value);
            }
        }
        self
    }

    /// Add a value that serializes to its own wire shape, skipped when `None`
    pub(crate) fn wire(mut self, wire_key: &str, value: Option<&impl Serialize>) -> Self {
        if let Some(value) = value.and_then(to_json) {
            self.literals.insert(wire_key.to_string(), value);
        }
        self
    }

    /// Normalize the collected fields and add the literals on top
    pub(crate) fn build(self, deep: bool) -> JsonObject {
        let mut body = normalize(&self.fields, deep);
        body.extend(self.literals);
        body
    }
}

/// Serialization of the plain data types used in request bodies cannot fail;
/// `None` only appears for values that do not serialize to JSON at all.
fn to_json(value: impl Serialize) -> Option<JsonValue> {
    serde_json::to_value(value).ok()
}
