//! Pagination types
//!
//! Continuation state and the decoding of a single page response.

use crate::error::{Error, Result};
use crate::request::PageSpec;
use crate::types::JsonValue;

/// Where a paginator stands between pulls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ContinuationState {
    /// Nothing fetched yet
    #[default]
    Initial,
    /// More pages expected; echo this token next
    Token(String),
    /// Last page seen, or the sequence failed
    Exhausted,
}

impl ContinuationState {
    pub(crate) fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    pub(crate) fn token(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }
}

/// One decoded page
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Page {
    pub items: Vec<JsonValue>,
    pub next_token: Option<String>,
}

/// Decode a page response for `action`
///
/// The result key must hold an array. A missing result key is tolerated
/// only when the response still carries a token (the page is then empty);
/// a response with neither is a protocol violation. An empty or null token
/// means the same as no token.
pub(crate) fn read_page(action: &str, spec: PageSpec, response: JsonValue) -> Result<Page> {
    let JsonValue::Object(mut body) = response else {
        return Err(Error::protocol(action, "response is not a JSON object"));
    };

    let items = match body.remove(spec.result_key) {
        Some(JsonValue::Array(items)) => Some(items),
        None | Some(JsonValue::Null) => None,
        Some(other) => {
            return Err(Error::protocol(
                action,
                format!(
                    "'{}' should be an array, got {}",
                    spec.result_key,
                    json_kind(&other)
                ),
            ))
        }
    };

    let next_token = match body.remove(spec.token_field) {
        Some(JsonValue::String(token)) if !token.is_empty() => Some(token),
        Some(JsonValue::String(_) | JsonValue::Null) | None => None,
        Some(other) => {
            return Err(Error::protocol(
                action,
                format!(
                    "'{}' should be a string, got {}",
                    spec.token_field,
                    json_kind(&other)
                ),
            ))
        }
    };

    match (items, next_token) {
        (Some(items), next_token) => Ok(Page { items, next_token }),
        (None, Some(token)) => Ok(Page {
            items: Vec::new(),
            next_token: Some(token),
        }),
        (None, None) => Err(Error::protocol(
            action,
            format!(
                "response has neither '{}' nor '{}'",
                spec.result_key, spec.token_field
            ),
        )),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
