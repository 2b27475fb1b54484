//! Administrative user actions
//!
//! These run with developer credentials against a user pool and address
//! users by pool id and username.

use super::{
    AnalyticsMetadata, ClientMetadataOptions, MaxResultsOptions, Options, PageLimitOptions,
};
use crate::request::{Body, PageSpec, Request};
use crate::types::{Attribute, AuthFlow, ChallengeName, DeliveryMedium, MessageAction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Options
// ============================================================================

/// Options for `AdminCreateUser`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminCreateUserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_data: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_alias_creation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_action: Option<MessageAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_delivery_mediums: Option<Vec<DeliveryMedium>>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
}

impl Options for AdminCreateUserOptions {}

/// Options for `AdminSetUserPassword`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminSetUserPasswordOptions {
    /// Skip the forced password change on next sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,
}

impl Options for AdminSetUserPasswordOptions {}

/// Options for `ListUsers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListUsersOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_get: Option<Vec<String>>,
    /// Filter expression, e.g. `email ^= "alice"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Options for ListUsersOptions {}

/// Options for `AdminInitiateAuth`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminInitiateAuthOptions {
    /// Flow-specific parameters (`USERNAME`, `PASSWORD`, `SECRET_HASH`, ...)
    #[serde(skip_serializing)]
    pub auth_parameters: HashMap<String, String>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_metadata: Option<AnalyticsMetadata>,
    #[serde(skip_serializing)]
    pub context_data: Option<ContextData>,
}

impl Options for AdminInitiateAuthOptions {}

/// Options for `AdminRespondToAuthChallenge`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminRespondToAuthChallengeOptions {
    /// Challenge answers keyed by wire name (`USERNAME`, `NEW_PASSWORD`, ...)
    #[serde(skip_serializing)]
    pub challenge_responses: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_metadata: Option<AnalyticsMetadata>,
    #[serde(skip_serializing)]
    pub context_data: Option<ContextData>,
}

impl Options for AdminRespondToAuthChallengeOptions {}

/// Options for `AdminSetUserMFAPreference`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminSetUserMfaPreferenceOptions {
    #[serde(
        rename = "SMS_mfa_settings",
        alias = "sms_mfa_settings",
        skip_serializing_if = "Option::is_none"
    )]
    pub sms_mfa_settings: Option<MfaSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_token_mfa_settings: Option<MfaSettings>,
}

impl Options for AdminSetUserMfaPreferenceOptions {}

/// Per-factor MFA preference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MfaSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_mfa: Option<bool>,
}

/// Request context forwarded for risk evaluation on admin auth calls
///
/// Read from snake_case option bags, written in its own wire casing: the
/// nested headers use `headerName`/`headerValue`, which key normalization
/// would otherwise turn into `HeaderName`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "PascalCase"))]
pub struct ContextData {
    pub ip_address: String,
    pub server_name: String,
    pub server_path: String,
    pub http_headers: Vec<HttpHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_data: Option<String>,
}

/// One header of the end user's original HTTP request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct HttpHeader {
    pub header_name: String,
    pub header_value: String,
}

// ============================================================================
// Builders
// ============================================================================

fn pool_user(user_pool_id: &str, username: &str) -> Body {
    Body::new()
        .field("user_pool_id", user_pool_id)
        .field("username", username)
}

/// `AdminCreateUser`
pub fn admin_create_user(
    user_pool_id: &str,
    username: &str,
    options: AdminCreateUserOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .options(&options)
        .literal("ClientMetadata", &options.client_metadata)
        .build(true);
    Request::new("AdminCreateUser", body)
}

/// `AdminGetUser`
pub fn admin_get_user(user_pool_id: &str, username: &str) -> Request {
    Request::new(
        "AdminGetUser",
        pool_user(user_pool_id, username).build(false),
    )
}

/// `AdminDeleteUser`
pub fn admin_delete_user(user_pool_id: &str, username: &str) -> Request {
    Request::new(
        "AdminDeleteUser",
        pool_user(user_pool_id, username).build(false),
    )
}

/// `AdminEnableUser`
pub fn admin_enable_user(user_pool_id: &str, username: &str) -> Request {
    Request::new(
        "AdminEnableUser",
        pool_user(user_pool_id, username).build(false),
    )
}

/// `AdminDisableUser`
pub fn admin_disable_user(user_pool_id: &str, username: &str) -> Request {
    Request::new(
        "AdminDisableUser",
        pool_user(user_pool_id, username).build(false),
    )
}

/// `AdminUpdateUserAttributes`
pub fn admin_update_user_attributes(
    user_pool_id: &str,
    username: &str,
    attributes: &[Attribute],
    options: ClientMetadataOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .field("user_attributes", attributes)
        .literal("ClientMetadata", &options.client_metadata)
        .build(true);
    Request::new("AdminUpdateUserAttributes", body)
}

/// `AdminDeleteUserAttributes`
pub fn admin_delete_user_attributes(
    user_pool_id: &str,
    username: &str,
    attribute_names: &[String],
) -> Request {
    let body = pool_user(user_pool_id, username)
        .field("user_attribute_names", attribute_names)
        .build(false);
    Request::new("AdminDeleteUserAttributes", body)
}

/// `AdminSetUserPassword`
pub fn admin_set_user_password(
    user_pool_id: &str,
    username: &str,
    password: &str,
    options: AdminSetUserPasswordOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .field("password", password)
        .options(&options)
        .build(false);
    Request::new("AdminSetUserPassword", body)
}

/// `AdminResetUserPassword`
pub fn admin_reset_user_password(
    user_pool_id: &str,
    username: &str,
    options: ClientMetadataOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("AdminResetUserPassword", body)
}

/// `AdminConfirmSignUp`
pub fn admin_confirm_sign_up(
    user_pool_id: &str,
    username: &str,
    options: ClientMetadataOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("AdminConfirmSignUp", body)
}

/// `AdminUserGlobalSignOut`
pub fn admin_user_global_sign_out(user_pool_id: &str, username: &str) -> Request {
    Request::new(
        "AdminUserGlobalSignOut",
        pool_user(user_pool_id, username).build(false),
    )
}

/// `AdminAddUserToGroup`
pub fn admin_add_user_to_group(user_pool_id: &str, username: &str, group_name: &str) -> Request {
    let body = pool_user(user_pool_id, username)
        .field("group_name", group_name)
        .build(false);
    Request::new("AdminAddUserToGroup", body)
}

/// `AdminRemoveUserFromGroup`
pub fn admin_remove_user_from_group(
    user_pool_id: &str,
    username: &str,
    group_name: &str,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .field("group_name", group_name)
        .build(false);
    Request::new("AdminRemoveUserFromGroup", body)
}

/// `AdminSetUserMFAPreference`
pub fn admin_set_user_mfa_preference(
    user_pool_id: &str,
    username: &str,
    options: AdminSetUserMfaPreferenceOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .options(&options)
        .build(true);
    Request::new("AdminSetUserMFAPreference", body)
}

/// `AdminForgetDevice`
pub fn admin_forget_device(user_pool_id: &str, username: &str, device_key: &str) -> Request {
    let body = pool_user(user_pool_id, username)
        .field("device_key", device_key)
        .build(false);
    Request::new("AdminForgetDevice", body)
}

/// `AdminInitiateAuth`
pub fn admin_initiate_auth(
    user_pool_id: &str,
    client_id: &str,
    auth_flow: AuthFlow,
    options: AdminInitiateAuthOptions,
) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .field("client_id", client_id)
        .field("auth_flow", auth_flow)
        .options(&options)
        .literal("AuthParameters", &options.auth_parameters)
        .literal("ClientMetadata", &options.client_metadata)
        .wire("ContextData", options.context_data.as_ref())
        .build(true);
    Request::new("AdminInitiateAuth", body)
}

/// `AdminRespondToAuthChallenge`
pub fn admin_respond_to_auth_challenge(
    user_pool_id: &str,
    client_id: &str,
    challenge_name: ChallengeName,
    options: AdminRespondToAuthChallengeOptions,
) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .field("client_id", client_id)
        .field("challenge_name", challenge_name)
        .options(&options)
        .literal("ChallengeResponses", &options.challenge_responses)
        .literal("ClientMetadata", &options.client_metadata)
        .wire("ContextData", options.context_data.as_ref())
        .build(true);
    Request::new("AdminRespondToAuthChallenge", body)
}

// ============================================================================
// Paginated builders
// ============================================================================

/// `ListUsers`, paginated over `Users`
pub fn list_users(user_pool_id: &str, options: ListUsersOptions) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .options(&options)
        .build(false);
    Request::paginated("ListUsers", body, PageSpec::pagination_token("Users"))
}

/// `AdminListGroupsForUser`, paginated over `Groups`
pub fn admin_list_groups_for_user(
    user_pool_id: &str,
    username: &str,
    options: PageLimitOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .options(&options)
        .build(false);
    Request::paginated(
        "AdminListGroupsForUser",
        body,
        PageSpec::next_token("Groups"),
    )
}

/// `AdminListUserAuthEvents`, paginated over `AuthEvents`
pub fn admin_list_user_auth_events(
    user_pool_id: &str,
    username: &str,
    options: MaxResultsOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .options(&options)
        .build(false);
    Request::paginated(
        "AdminListUserAuthEvents",
        body,
        PageSpec::next_token("AuthEvents"),
    )
}

/// `AdminListDevices`, paginated over `Devices`
pub fn admin_list_devices(
    user_pool_id: &str,
    username: &str,
    options: PageLimitOptions,
) -> Request {
    let body = pool_user(user_pool_id, username)
        .options(&options)
        .build(false);
    Request::paginated(
        "AdminListDevices",
        body,
        PageSpec::pagination_token("Devices"),
    )
}
