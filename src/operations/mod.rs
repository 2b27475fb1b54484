//! Operation builders
//!
//! One pure function per remote action. Each takes the action's required
//! arguments plus an options struct and returns a [`Request`](crate::Request);
//! list actions return a paginated request that the client can turn into a
//! stream.
//!
//! # Options
//!
//! Options structs list every optional field the action accepts, all absent
//! by default. They can also be parsed from a loose JSON "bag" with
//! [`Options::from_bag`], which rejects any key the action does not know.
//!
//! ```rust,ignore
//! use cognito_idp_client::operations::{list_users, ListUsersOptions, Options};
//!
//! let options = ListUsersOptions::from_bag(serde_json::json!({
//!     "limit": 10,
//!     "attributes_to_get": ["email"]
//! }))?;
//! let request = list_users("eu-west-1_pool", options);
//! ```

mod auth;
mod groups;
mod pools;
mod users;

pub use auth::*;
pub use groups::*;
pub use pools::*;
pub use users::*;

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional parameters of one or more operations
pub trait Options: Serialize + DeserializeOwned + Default {
    /// Parse options from a snake_case JSON object
    ///
    /// `null` yields the defaults. Unknown keys and wrongly typed values are
    /// rejected with [`Error::InvalidOption`].
    fn from_bag(bag: JsonValue) -> Result<Self> {
        if bag.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(bag)
            .map_err(|e| Error::invalid_option(short_type_name::<Self>(), e.to_string()))
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// Shared option sets
// ============================================================================

/// Page size for list actions that call it `Limit`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageLimitOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Options for PageLimitOptions {}

/// Page size for list actions that call it `MaxResults`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaxResultsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl Options for MaxResultsOptions {}

/// Free-form key/value pairs passed through to Lambda triggers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientMetadataOptions {
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
}

impl Options for ClientMetadataOptions {}

/// Options for unauthenticated actions of app clients that have a secret
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecretHashOptions {
    /// Pre-computed keyed hash of username and client id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<String>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
}

impl Options for SecretHashOptions {}

// ============================================================================
// Shared nested structures
// ============================================================================

/// Pinpoint analytics endpoint for auth events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_endpoint_id: Option<String>,
}

/// Device fingerprint data for advanced security features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserContextData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}
