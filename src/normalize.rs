//! Field name normalization
//!
//! Request bodies are assembled with snake_case keys and converted to the
//! UpperCamelCase names the service expects (`user_pool_id` → `UserPoolId`).

use crate::types::{JsonObject, JsonValue};

/// Convert every key of `object` to its wire name.
///
/// With `deep` set, nested objects and objects inside arrays are converted
/// too. Scalar values are never touched, and a key already in wire form
/// (`UserPoolId`, `USERNAME`) converts to itself.
pub fn normalize(object: &JsonObject, deep: bool) -> JsonObject {
    object
        .iter()
        .map(|(key, value)| {
            let value = if deep {
                normalize_value(value)
            } else {
                value.clone()
            };
            (wire_name(key), value)
        })
        .collect()
}

fn normalize_value(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => JsonValue::Object(normalize(map, true)),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(normalize_value).collect()),
        scalar => scalar.clone(),
    }
}

/// Convert a single snake_case key to UpperCamelCase
///
/// Only the first character of each `_`-separated segment is changed, so
/// `o_auth` becomes `OAuth` and `USERNAME` stays as is.
pub fn wire_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for segment in key.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
