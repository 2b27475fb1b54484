//! Typed response items
//!
//! The service returns items with UpperCamelCase keys and timestamps as
//! fractional epoch seconds. These models cover the items yielded by the
//! list actions; anything not modelled here stays available as raw JSON.
//!
//! Models serialize back to the same wire shape they were read from.

use crate::types::Attribute;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A user as returned by `ListUsers` and `ListUsersInGroup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub username: String,
    #[serde(default, serialize_with = "wire_attributes")]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub enabled: bool,
    /// `CONFIRMED`, `UNCONFIRMED`, `FORCE_CHANGE_PASSWORD`, ...
    #[serde(default)]
    pub user_status: Option<String>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_create_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_last_modified_date: Option<DateTime<Utc>>,
}

impl User {
    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub group_name: String,
    #[serde(default)]
    pub user_pool_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub role_arn: Option<String>,
    #[serde(default)]
    pub precedence: Option<u32>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Summary item of `ListUserPools`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolDescription {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Summary item of `ListUserPoolClients`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolClientDescription {
    pub client_id: String,
    pub user_pool_id: String,
    pub client_name: String,
}

/// Summary item of `ListIdentityProviders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderDescription {
    pub provider_name: String,
    pub provider_type: String,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// A remembered device of `ListDevices` / `AdminListDevices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    pub device_key: String,
    #[serde(default, serialize_with = "wire_attributes")]
    pub device_attributes: Vec<Attribute>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_create_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_last_modified_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_last_authenticated_date: Option<DateTime<Utc>>,
}

/// One entry of `AdminListUserAuthEvents`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthEvent {
    pub event_id: String,
    /// `SignIn`, `SignUp` or `ForgotPassword`
    pub event_type: String,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    /// `Pass` or `Fail`
    #[serde(default)]
    pub event_response: Option<String>,
    #[serde(default)]
    pub challenge_responses: Vec<ChallengeResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChallengeResponse {
    #[serde(default)]
    pub challenge_name: Option<String>,
    #[serde(default)]
    pub challenge_response: Option<String>,
}

/// `Attribute` serializes in option-bag casing for request bodies; items
/// keep the `Name`/`Value` casing of the response.
fn wire_attributes<S>(attributes: &[Attribute], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct WireAttribute<'a> {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<&'a str>,
    }

    serializer.collect_seq(attributes.iter().map(|attribute| WireAttribute {
        name: &attribute.name,
        value: attribute.value.as_deref(),
    }))
}

/// Fractional epoch seconds to and from UTC, millisecond precision
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::cast_precision_loss)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => serializer.serialize_f64(at.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !seconds.is_finite() {
            return Err(serde::de::Error::custom(format!(
                "invalid epoch timestamp {seconds}"
            )));
        }

        let millis = (seconds * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| {
                serde::de::Error::custom(format!("epoch timestamp {seconds} out of range"))
            })
    }
}
