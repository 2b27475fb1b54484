//! Group actions

use super::{Options, PageLimitOptions};
use crate::request::{Body, PageSpec, Request};
use serde::{Deserialize, Serialize};

/// Options for `CreateGroup` and `UpdateGroup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Lower values take priority when a user belongs to several groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<u32>,
}

impl Options for GroupOptions {}

fn pool_group(user_pool_id: &str, group_name: &str) -> Body {
    Body::new()
        .field("group_name", group_name)
        .field("user_pool_id", user_pool_id)
}

/// `CreateGroup`
pub fn create_group(user_pool_id: &str, group_name: &str, options: GroupOptions) -> Request {
    let body = pool_group(user_pool_id, group_name)
        .options(&options)
        .build(false);
    Request::new("CreateGroup", body)
}

/// `GetGroup`
pub fn get_group(user_pool_id: &str, group_name: &str) -> Request {
    Request::new("GetGroup", pool_group(user_pool_id, group_name).build(false))
}

/// `UpdateGroup`
pub fn update_group(user_pool_id: &str, group_name: &str, options: GroupOptions) -> Request {
    let body = pool_group(user_pool_id, group_name)
        .options(&options)
        .build(false);
    Request::new("UpdateGroup", body)
}

/// `DeleteGroup`
pub fn delete_group(user_pool_id: &str, group_name: &str) -> Request {
    Request::new(
        "DeleteGroup",
        pool_group(user_pool_id, group_name).build(false),
    )
}

/// `ListGroups`, paginated over `Groups`
pub fn list_groups(user_pool_id: &str, options: PageLimitOptions) -> Request {
    let body = Body::new()
        .field("user_pool_id", user_pool_id)
        .options(&options)
        .build(false);
    Request::paginated("ListGroups", body, PageSpec::next_token("Groups"))
}

/// `ListUsersInGroup`, paginated over `Users`
pub fn list_users_in_group(
    user_pool_id: &str,
    group_name: &str,
    options: PageLimitOptions,
) -> Request {
    let body = pool_group(user_pool_id, group_name)
        .options(&options)
        .build(false);
    Request::paginated("ListUsersInGroup", body, PageSpec::next_token("Users"))
}
