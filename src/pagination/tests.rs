//! Tests for pagination module

use super::types::{read_page, ContinuationState, Page};
use super::*;
use crate::error::Error;
use crate::mock::MockTransport;
use crate::request::{PageSpec, Request};
use crate::types::{JsonObject, JsonValue};
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

const USERS: PageSpec = PageSpec::pagination_token("Users");

fn list_users_request() -> Request {
    let mut body = JsonObject::new();
    body.insert("UserPoolId".to_string(), json!("pool1"));
    body.insert("Limit".to_string(), json!(2));
    Request::paginated("ListUsers", body, USERS)
}

fn paginator(transport: &MockTransport) -> TokenPaginator {
    TokenPaginator::new(Arc::new(transport.clone()), list_users_request()).unwrap()
}

fn users(range: std::ops::Range<u32>) -> Vec<JsonValue> {
    range.map(|i| json!({"Username": format!("u{i}")})).collect()
}

// ============================================================================
// Page decoding
// ============================================================================

#[test]
fn test_read_page_with_token() {
    let page = read_page(
        "ListUsers",
        USERS,
        json!({"Users": [{"Username": "u1"}], "PaginationToken": "tok1"}),
    )
    .unwrap();

    assert_eq!(
        page,
        Page {
            items: vec![json!({"Username": "u1"})],
            next_token: Some("tok1".to_string()),
        }
    );
}

#[test]
fn test_read_page_without_token_is_last() {
    let page = read_page("ListUsers", USERS, json!({"Users": []})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.next_token, None);
}

#[test]
fn test_read_page_empty_or_null_token_is_last() {
    let page = read_page(
        "ListUsers",
        USERS,
        json!({"Users": [1], "PaginationToken": ""}),
    )
    .unwrap();
    assert_eq!(page.next_token, None);

    let page = read_page(
        "ListUsers",
        USERS,
        json!({"Users": [1], "PaginationToken": null}),
    )
    .unwrap();
    assert_eq!(page.next_token, None);
}

#[test]
fn test_read_page_token_without_results_is_empty_page() {
    let page = read_page("ListUsers", USERS, json!({"PaginationToken": "tok9"})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.next_token, Some("tok9".to_string()));
}

#[test]
fn test_read_page_protocol_violations() {
    let cases = [
        json!({}),
        json!({"Something": []}),
        json!({"Users": {"Username": "u1"}}),
        json!({"Users": [], "PaginationToken": 42}),
        json!([{"Username": "u1"}]),
    ];

    for response in cases {
        let err = read_page("ListUsers", USERS, response.clone()).unwrap_err();
        assert!(
            matches!(err, Error::ProtocolViolation { .. }),
            "expected protocol violation for {response}, got {err:?}"
        );
    }
}

#[test]
fn test_continuation_state() {
    assert_eq!(ContinuationState::default(), ContinuationState::Initial);
    assert_eq!(ContinuationState::Token("t".into()).token(), Some("t"));
    assert_eq!(ContinuationState::Initial.token(), None);
    assert!(ContinuationState::Exhausted.is_exhausted());
}

// ============================================================================
// Paginator behaviour
// ============================================================================

#[test]
fn test_one_shot_request_is_rejected() {
    let transport = MockTransport::new();
    let request = Request::new("AdminGetUser", JsonObject::new());

    let err = TokenPaginator::new(Arc::new(transport), request).unwrap_err();
    assert!(matches!(err, Error::NotPaginated { action } if action == "AdminGetUser"));
}

#[tokio::test]
async fn test_two_page_scenario() {
    let transport = MockTransport::new();
    transport
        .push_response(json!({
            "Users": [{"Username": "u1"}, {"Username": "u2"}],
            "PaginationToken": "tok1"
        }))
        .push_response(json!({"Users": [{"Username": "u3"}]}));

    let mut stream = paginator(&transport).into_items();
    let mut names = Vec::new();
    while let Some(user) = stream.next().await {
        names.push(user.unwrap()["Username"].as_str().unwrap().to_string());
    }

    assert_eq!(names, vec!["u1", "u2", "u3"]);
    assert_eq!(transport.call_count(), 2);
    assert!(stream.next().await.is_none());
    assert_eq!(transport.call_count(), 2);

    let requests = transport.requests();
    assert_eq!(requests[1].body()["PaginationToken"], json!("tok1"));
}

#[tokio::test]
async fn test_full_consumption_yields_all_items_in_order() {
    // 7 items, page size 3 -> 3 pages
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..3), users(3..6), users(6..7)]);

    let items: Vec<JsonValue> = paginator(&transport)
        .into_items()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(items, users(0..7));
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test]
async fn test_token_is_merged_into_base_body() {
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..2), users(2..4), users(4..5)]);

    let _: Vec<JsonValue> = paginator(&transport)
        .into_items()
        .try_collect()
        .await
        .unwrap();

    let requests = transport.requests();
    let base = list_users_request();
    assert_eq!(requests[0].body(), base.body());
    for (index, request) in requests.iter().enumerate().skip(1) {
        let mut expected = base.body().clone();
        expected.insert("PaginationToken".to_string(), json!(format!("tok{index}")));
        assert_eq!(request.body(), &expected);
        assert_eq!(request.headers(), base.headers());
        assert_eq!(request.action(), "ListUsers");
    }
}

#[tokio::test]
async fn test_nothing_is_fetched_before_first_pull() {
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..3), users(3..6)]);

    let mut stream = paginator(&transport).into_items();
    assert_eq!(transport.call_count(), 0);

    stream.next().await.unwrap().unwrap();
    stream.next().await.unwrap().unwrap();
    assert_eq!(transport.call_count(), 1);

    drop(stream);
    assert_eq!(transport.remaining(), 1);
}

#[tokio::test]
async fn test_independent_paginators_restart_from_first_page() {
    let transport = MockTransport::new();
    let pages = vec![users(0..2), users(2..3)];
    transport.push_pages(USERS, pages.clone());
    transport.push_pages(USERS, pages);

    let first = paginator(&transport);
    let second = paginator(&transport);

    let a: Vec<JsonValue> = first.into_items().try_collect().await.unwrap();
    assert_eq!(transport.call_count(), 2);
    let b: Vec<JsonValue> = second.into_items().try_collect().await.unwrap();

    assert_eq!(a, b);
    assert_eq!(transport.call_count(), 4);

    let requests = transport.requests();
    assert!(!requests[2].body().contains_key("PaginationToken"));
}

#[tokio::test]
async fn test_protocol_violation_after_good_pages() {
    let transport = MockTransport::new();
    transport
        .push_response(json!({"Users": [{"Username": "u1"}], "PaginationToken": "tok1"}))
        .push_response(json!({"Unexpected": true}));

    let mut stream = paginator(&transport).into_items();

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first, json!({"Username": "u1"}));

    let err = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(err, Error::ProtocolViolation { ref action, .. } if action == "ListUsers"));

    assert!(stream.next().await.is_none());
    assert_eq!(transport.call_count(), 2);
    assert_eq!(first["Username"], "u1");
}

#[tokio::test]
async fn test_transport_error_propagates_unchanged() {
    let transport = MockTransport::new();
    transport
        .push_response(json!({"Users": [{"Username": "u1"}], "PaginationToken": "tok1"}))
        .push_error(Error::service(400, "NotAuthorizedException", "expired"));

    let mut pager = paginator(&transport);
    assert_eq!(pager.next_page().await.unwrap().unwrap().len(), 1);

    let err = pager.next_page().await.unwrap_err();
    assert_eq!(err.service_code(), Some("NotAuthorizedException"));
    assert!(pager.is_exhausted());

    // never resumes
    assert!(pager.next_page().await.unwrap().is_none());
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn test_repeated_token_is_a_protocol_violation() {
    let transport = MockTransport::new();
    transport
        .push_response(json!({"Users": [1], "PaginationToken": "same"}))
        .push_response(json!({"Users": [2], "PaginationToken": "same"}))
        .push_response(json!({"Users": [3]}));

    let mut pager = paginator(&transport);
    pager.next_page().await.unwrap();
    let err = pager.next_page().await.unwrap_err();

    assert!(err.to_string().contains("repeated the previous token"));
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn test_max_pages_stops_early() {
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..2), users(2..4), users(4..6)]);

    let items: Vec<JsonValue> = paginator(&transport)
        .with_max_pages(Some(2))
        .into_items()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(items, users(0..4));
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn test_page_limit_reports_truncation() {
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..2), users(2..4)]);

    let mut pager = paginator(&transport).with_max_pages(Some(1));
    assert_eq!(pager.next_page().await.unwrap(), Some(users(0..2)));
    assert!(!pager.was_truncated());

    assert_eq!(pager.next_page().await.unwrap(), None);
    assert!(pager.was_truncated());
    assert!(pager.is_exhausted());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_last_page_at_limit_is_not_truncation() {
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..2), users(2..4)]);

    let mut pager = paginator(&transport).with_max_pages(Some(2));
    while pager.next_page().await.unwrap().is_some() {}

    assert_eq!(pager.pages_fetched(), 2);
    assert!(!pager.was_truncated());
}

#[tokio::test]
async fn test_pages_view_keeps_page_boundaries() {
    let transport = MockTransport::new();
    transport.push_pages(USERS, vec![users(0..2), vec![], users(2..3)]);

    let pages: Vec<Vec<JsonValue>> = paginator(&transport)
        .into_pages()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages, vec![users(0..2), vec![], users(2..3)]);
}

#[tokio::test]
async fn test_paginators_run_on_separate_tasks() {
    let left = MockTransport::new();
    let right = MockTransport::new();
    left.push_pages(USERS, vec![users(0..2), users(2..4)]);
    right.push_pages(USERS, vec![users(10..11), users(11..12), users(12..13)]);

    let a = tokio::spawn(paginator(&left).into_items().try_collect::<Vec<_>>());
    let b = tokio::spawn(paginator(&right).into_items().try_collect::<Vec<_>>());

    assert_eq!(a.await.unwrap().unwrap(), users(0..4));
    assert_eq!(b.await.unwrap().unwrap(), users(10..13));
    assert_eq!(left.call_count(), 2);
    assert_eq!(right.call_count(), 3);
}
