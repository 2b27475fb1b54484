//! User pool administration
//!
//! Pools themselves plus the resources hanging off them: app clients,
//! federated identity providers, resource servers and hosted-UI domains.

use super::{MaxResultsOptions, Options};
use crate::request::{Body, PageSpec, Request};
use crate::types::MfaConfiguration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// User pools
// ============================================================================

/// Options for `CreateUserPool` and `UpdateUserPool`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserPoolOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<UserPoolPolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_verified_attributes: Option<Vec<String>>,
    /// Create-only; the service rejects it on update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_attributes: Option<Vec<String>>,
    /// Create-only; the service rejects it on update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_configuration: Option<MfaConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_verification_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_authentication_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_create_user_config: Option<AdminCreateUserConfig>,
    /// Tag keys and values are sent as given
    #[serde(skip_serializing)]
    pub user_pool_tags: HashMap<String, String>,
}

impl Options for UserPoolOptions {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserPoolPolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password_validity_days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminCreateUserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_admin_create_user_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_message_template: Option<MessageTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageTemplate {
    #[serde(
        rename = "SMS_message",
        alias = "sms_message",
        skip_serializing_if = "Option::is_none"
    )]
    pub sms_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
}

/// `CreateUserPool`
pub fn create_user_pool(pool_name: &str, options: UserPoolOptions) -> Request {
    let body = Body::new()
        .field("pool_name", pool_name)
        .options(&options)
        .literal("UserPoolTags", &options.user_pool_tags)
        .build(true);
    Request::new("CreateUserPool", body)
}

/// `DescribeUserPool`
pub fn describe_user_pool(user_pool_id: &str) -> Request {
    let body = Body::new().field("user_pool_id", user_pool_id).build(false);
    Request::new("DescribeUserPool", body)
}

/// `UpdateUserPool`
pub fn update_user_pool(user_pool_id: &str, options: UserPoolOptions) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .options(&options)
        .literal("UserPoolTags", &options.user_pool_tags)
        .build(true);
    Request::new("UpdateUserPool", body)
}

/// `DeleteUserPool`
pub fn delete_user_pool(user_pool_id: &str) -> Request {
    let body = Body::new().field("user_pool_id", user_pool_id).build(false);
    Request::new("DeleteUserPool", body)
}

/// `ListUserPools`, paginated over `UserPools`
///
/// The service requires a page size for this action.
pub fn list_user_pools(max_results: u32) -> Request {
    let body = Body::new().field("max_results", max_results).build(false);
    Request::paginated("ListUserPools", body, PageSpec::next_token("UserPools"))
}

// ============================================================================
// App clients
// ============================================================================

/// Options for `CreateUserPoolClient` and `UpdateUserPoolClient`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserPoolClientOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_validity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_validity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_validity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_units: Option<TokenValidityUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_auth_flows: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_identity_providers: Option<Vec<String>>,
    #[serde(
        rename = "callback_URLs",
        alias = "callback_urls",
        skip_serializing_if = "Option::is_none"
    )]
    pub callback_urls: Option<Vec<String>>,
    #[serde(
        rename = "logout_URLs",
        alias = "logout_urls",
        skip_serializing_if = "Option::is_none"
    )]
    pub logout_urls: Option<Vec<String>>,
    #[serde(
        rename = "default_redirect_URI",
        alias = "default_redirect_uri",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_redirect_uri: Option<String>,
    #[serde(
        rename = "allowed_o_auth_flows",
        alias = "allowed_oauth_flows",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_oauth_flows: Option<Vec<String>>,
    #[serde(
        rename = "allowed_o_auth_scopes",
        alias = "allowed_oauth_scopes",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_oauth_scopes: Option<Vec<String>>,
    #[serde(
        rename = "allowed_o_auth_flows_user_pool_client",
        alias = "allowed_oauth_flows_user_pool_client",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_oauth_flows_user_pool_client: Option<bool>,
    /// `ENABLED` or `LEGACY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_user_existence_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_token_revocation: Option<bool>,
}

impl Options for UserPoolClientOptions {}

/// Units for the three token validity fields (`seconds`, `minutes`, `hours`, `days`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenValidityUnits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

fn pool_client(user_pool_id: &str, client_id: &str) -> Body {
    Body::new()
        .field("user_pool_id", user_pool_id)
        .field("client_id", client_id)
}

/// `CreateUserPoolClient`
///
/// `generate_secret` is create-only, so it is an argument here rather than
/// part of the options shared with updates.
pub fn create_user_pool_client(
    user_pool_id: &str,
    client_name: &str,
    generate_secret: bool,
    options: UserPoolClientOptions,
) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .field("client_name", client_name)
        .field("generate_secret", generate_secret)
        .options(&options)
        .build(true);
    Request::new("CreateUserPoolClient", body)
}

/// `DescribeUserPoolClient`
pub fn describe_user_pool_client(user_pool_id: &str, client_id: &str) -> Request {
    Request::new(
        "DescribeUserPoolClient",
        pool_client(user_pool_id, client_id).build(false),
    )
}

/// `UpdateUserPoolClient`
pub fn update_user_pool_client(
    user_pool_id: &str,
    client_id: &str,
    options: UserPoolClientOptions,
) -> Request {
    let body = pool_client(user_pool_id, client_id)
        .options(&options)
        .build(true);
    Request::new("UpdateUserPoolClient", body)
}

/// `DeleteUserPoolClient`
pub fn delete_user_pool_client(user_pool_id: &str, client_id: &str) -> Request {
    Request::new(
        "DeleteUserPoolClient",
        pool_client(user_pool_id, client_id).build(false),
    )
}

/// `ListUserPoolClients`, paginated over `UserPoolClients`
pub fn list_user_pool_clients(user_pool_id: &str, options: MaxResultsOptions) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .options(&options)
        .build(false);
    Request::paginated(
        "ListUserPoolClients",
        body,
        PageSpec::next_token("UserPoolClients"),
    )
}

// ============================================================================
// Identity providers
// ============================================================================

/// Options for `CreateIdentityProvider`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityProviderOptions {
    /// Maps pool attribute names to provider attribute names
    #[serde(skip_serializing)]
    pub attribute_mapping: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_identifiers: Option<Vec<String>>,
}

impl Options for IdentityProviderOptions {}

fn pool_provider(user_pool_id: &str, provider_name: &str) -> Body {
    Body::new()
        .field("user_pool_id", user_pool_id)
        .field("provider_name", provider_name)
}

/// `CreateIdentityProvider`
///
/// `provider_details` keys (`client_id`, `authorize_scopes`, `MetadataURL`,
/// ...) are provider specific and reach the wire unchanged.
pub fn create_identity_provider(
    user_pool_id: &str,
    provider_name: &str,
    provider_type: &str,
    provider_details: &HashMap<String, String>,
    options: IdentityProviderOptions,
) -> Request {
    let body = pool_provider(user_pool_id, provider_name)
        .field("provider_type", provider_type)
        .options(&options)
        .literal("ProviderDetails", provider_details)
        .literal("AttributeMapping", &options.attribute_mapping)
        .build(false);
    Request::new("CreateIdentityProvider", body)
}

/// `DescribeIdentityProvider`
pub fn describe_identity_provider(user_pool_id: &str, provider_name: &str) -> Request {
    Request::new(
        "DescribeIdentityProvider",
        pool_provider(user_pool_id, provider_name).build(false),
    )
}

/// `DeleteIdentityProvider`
pub fn delete_identity_provider(user_pool_id: &str, provider_name: &str) -> Request {
    Request::new(
        "DeleteIdentityProvider",
        pool_provider(user_pool_id, provider_name).build(false),
    )
}

/// `ListIdentityProviders`, paginated over `Providers`
pub fn list_identity_providers(user_pool_id: &str, options: MaxResultsOptions) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .options(&options)
        .build(false);
    Request::paginated(
        "ListIdentityProviders",
        body,
        PageSpec::next_token("Providers"),
    )
}

// ============================================================================
// Resource servers
// ============================================================================

/// Options for `CreateResourceServer`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceServerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<ResourceServerScope>>,
}

impl Options for ResourceServerOptions {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceServerScope {
    pub scope_name: String,
    pub scope_description: String,
}

impl ResourceServerScope {
    pub fn new(scope_name: impl Into<String>, scope_description: impl Into<String>) -> Self {
        Self {
            scope_name: scope_name.into(),
            scope_description: scope_description.into(),
        }
    }
}

/// `CreateResourceServer`
pub fn create_resource_server(
    user_pool_id: &str,
    identifier: &str,
    name: &str,
    options: ResourceServerOptions,
) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .field("identifier", identifier)
        .field("name", name)
        .options(&options)
        .build(true);
    Request::new("CreateResourceServer", body)
}

/// `DeleteResourceServer`
pub fn delete_resource_server(user_pool_id: &str, identifier: &str) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .field("identifier", identifier)
        .build(false);
    Request::new("DeleteResourceServer", body)
}

/// `ListResourceServers`, paginated over `ResourceServers`
///
/// The service requires a page size for this action.
pub fn list_resource_servers(user_pool_id: &str, max_results: u32) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .field("max_results", max_results)
        .build(false);
    Request::paginated(
        "ListResourceServers",
        body,
        PageSpec::next_token("ResourceServers"),
    )
}

// ============================================================================
// Domains
// ============================================================================

/// Options for `CreateUserPoolDomain`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserPoolDomainOptions {
    /// Only for custom domains; prefix domains under the service's own
    /// hostname need no certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain_config: Option<CustomDomainConfig>,
}

impl Options for UserPoolDomainOptions {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomDomainConfig {
    pub certificate_arn: String,
}

/// `CreateUserPoolDomain`
pub fn create_user_pool_domain(
    user_pool_id: &str,
    domain: &str,
    options: UserPoolDomainOptions,
) -> Request {
    let body = Body::new()
        .field("domain", domain)
        .field("user_pool_id", user_pool_id)
        .options(&options)
        .build(true);
    Request::new("CreateUserPoolDomain", body)
}

/// `DescribeUserPoolDomain`
pub fn describe_user_pool_domain(domain: &str) -> Request {
    let body = Body::new().field("domain", domain).build(false);
    Request::new("DescribeUserPoolDomain", body)
}

/// `DeleteUserPoolDomain`
pub fn delete_user_pool_domain(user_pool_id: &str, domain: &str) -> Request {
    let body = Body::new()
        .field("domain", domain)
        .field("user_pool_id", user_pool_id)
        .build(false);
    Request::new("DeleteUserPoolDomain", body)
}
