//! End-user actions
//!
//! Sign-up, sign-in and self-service calls made on behalf of a user. They
//! are addressed by app client id or by the user's access token rather than
//! by pool id.

use super::{
    AnalyticsMetadata, ClientMetadataOptions, Options, PageLimitOptions, SecretHashOptions,
    UserContextData,
};
use crate::request::{Body, PageSpec, Request};
use crate::types::{Attribute, AuthFlow, ChallengeName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Options
// ============================================================================

/// Options for `InitiateAuth`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitiateAuthOptions {
    #[serde(skip_serializing)]
    pub auth_parameters: HashMap<String, String>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_metadata: Option<AnalyticsMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context_data: Option<UserContextData>,
}

impl Options for InitiateAuthOptions {}

/// Options for `RespondToAuthChallenge`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RespondToAuthChallengeOptions {
    #[serde(skip_serializing)]
    pub challenge_responses: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_metadata: Option<AnalyticsMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context_data: Option<UserContextData>,
}

impl Options for RespondToAuthChallengeOptions {}

/// Options for `SignUp`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignUpOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_data: Option<Vec<Attribute>>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_metadata: Option<AnalyticsMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context_data: Option<UserContextData>,
}

impl Options for SignUpOptions {}

/// Options for `ConfirmSignUp`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfirmSignUpOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_alias_creation: Option<bool>,
    #[serde(skip_serializing)]
    pub client_metadata: HashMap<String, String>,
}

impl Options for ConfirmSignUpOptions {}

/// Options for `RevokeToken`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevokeTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl Options for RevokeTokenOptions {}

/// Options for `AssociateSoftwareToken`
///
/// Exactly one of the two is expected by the service: the access token of a
/// signed-in user, or the session of an `MFA_SETUP` challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssociateSoftwareTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl Options for AssociateSoftwareTokenOptions {}

/// Options for `VerifySoftwareToken`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifySoftwareTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_device_name: Option<String>,
}

impl Options for VerifySoftwareTokenOptions {}

// ============================================================================
// Sign-in
// ============================================================================

/// `InitiateAuth`
pub fn initiate_auth(
    client_id: &str,
    auth_flow: AuthFlow,
    options: InitiateAuthOptions,
) -> Request {
    let body = Body::new()
        .field("auth_flow", auth_flow)
        .field("client_id", client_id)
        .options(&options)
        .literal("AuthParameters", &options.auth_parameters)
        .literal("ClientMetadata", &options.client_metadata)
        .build(true);
    Request::new("InitiateAuth", body)
}

/// `RespondToAuthChallenge`
pub fn respond_to_auth_challenge(
    client_id: &str,
    challenge_name: ChallengeName,
    options: RespondToAuthChallengeOptions,
) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("challenge_name", challenge_name)
        .options(&options)
        .literal("ChallengeResponses", &options.challenge_responses)
        .literal("ClientMetadata", &options.client_metadata)
        .build(true);
    Request::new("RespondToAuthChallenge", body)
}

/// `RevokeToken`
pub fn revoke_token(client_id: &str, token: &str, options: RevokeTokenOptions) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("token", token)
        .options(&options)
        .build(false);
    Request::new("RevokeToken", body)
}

// ============================================================================
// Sign-up and recovery
// ============================================================================

/// `SignUp`
pub fn sign_up(client_id: &str, username: &str, password: &str, options: SignUpOptions) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("username", username)
        .field("password", password)
        .options(&options)
        .literal("ClientMetadata", &options.client_metadata)
        .build(true);
    Request::new("SignUp", body)
}

/// `ConfirmSignUp`
pub fn confirm_sign_up(
    client_id: &str,
    username: &str,
    confirmation_code: &str,
    options: ConfirmSignUpOptions,
) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("username", username)
        .field("confirmation_code", confirmation_code)
        .options(&options)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("ConfirmSignUp", body)
}

/// `ResendConfirmationCode`
pub fn resend_confirmation_code(
    client_id: &str,
    username: &str,
    options: SecretHashOptions,
) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("username", username)
        .options(&options)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("ResendConfirmationCode", body)
}

/// `ForgotPassword`
pub fn forgot_password(client_id: &str, username: &str, options: SecretHashOptions) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("username", username)
        .options(&options)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("ForgotPassword", body)
}

/// `ConfirmForgotPassword`
pub fn confirm_forgot_password(
    client_id: &str,
    username: &str,
    confirmation_code: &str,
    password: &str,
    options: SecretHashOptions,
) -> Request {
    let body = Body::new()
        .field("client_id", client_id)
        .field("username", username)
        .field("confirmation_code", confirmation_code)
        .field("password", password)
        .options(&options)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("ConfirmForgotPassword", body)
}

// ============================================================================
// Signed-in user
// ============================================================================

fn with_access_token(access_token: &str) -> Body {
    Body::new().field("access_token", access_token)
}

/// `ChangePassword`
pub fn change_password(
    access_token: &str,
    previous_password: &str,
    proposed_password: &str,
) -> Request {
    let body = with_access_token(access_token)
        .field("previous_password", previous_password)
        .field("proposed_password", proposed_password)
        .build(false);
    Request::new("ChangePassword", body)
}

/// `GetUser`
pub fn get_user(access_token: &str) -> Request {
    Request::new("GetUser", with_access_token(access_token).build(false))
}

/// `DeleteUser`
pub fn delete_user(access_token: &str) -> Request {
    Request::new("DeleteUser", with_access_token(access_token).build(false))
}

/// `GlobalSignOut`
pub fn global_sign_out(access_token: &str) -> Request {
    Request::new("GlobalSignOut", with_access_token(access_token).build(false))
}

/// `UpdateUserAttributes`
pub fn update_user_attributes(
    access_token: &str,
    attributes: &[Attribute],
    options: ClientMetadataOptions,
) -> Request {
    let body = with_access_token(access_token)
        .field("user_attributes", attributes)
        .literal("ClientMetadata", &options.client_metadata)
        .build(true);
    Request::new("UpdateUserAttributes", body)
}

/// `GetUserAttributeVerificationCode`
pub fn get_user_attribute_verification_code(
    access_token: &str,
    attribute_name: &str,
    options: ClientMetadataOptions,
) -> Request {
    let body = with_access_token(access_token)
        .field("attribute_name", attribute_name)
        .literal("ClientMetadata", &options.client_metadata)
        .build(false);
    Request::new("GetUserAttributeVerificationCode", body)
}

/// `VerifyUserAttribute`
pub fn verify_user_attribute(access_token: &str, attribute_name: &str, code: &str) -> Request {
    let body = with_access_token(access_token)
        .field("attribute_name", attribute_name)
        .field("code", code)
        .build(false);
    Request::new("VerifyUserAttribute", body)
}

/// `AssociateSoftwareToken`
pub fn associate_software_token(options: AssociateSoftwareTokenOptions) -> Request {
    Request::new(
        "AssociateSoftwareToken",
        Body::new().options(&options).build(false),
    )
}

/// `VerifySoftwareToken`
pub fn verify_software_token(user_code: &str, options: VerifySoftwareTokenOptions) -> Request {
    let body = Body::new()
        .field("user_code", user_code)
        .options(&options)
        .build(false);
    Request::new("VerifySoftwareToken", body)
}

/// `ListDevices`, paginated over `Devices`
pub fn list_devices(access_token: &str, options: PageLimitOptions) -> Request {
    let body = with_access_token(access_token)
        .options(&options)
        .build(false);
    Request::paginated("ListDevices", body, PageSpec::pagination_token("Devices"))
}
