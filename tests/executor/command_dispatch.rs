//! Command Dispatch Tests
//!
//! Drive the executor with wire-format commands against in-memory storage.

use crate::common::*;
use contentdb::{Command, Output, RequestContext};
use serde_json::json;

fn command(value: serde_json::Value) -> Command {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn create_then_get_over_the_wire() {
    let executor = create_executor();
    let request = RequestContext::new();

    let created = executor
        .execute(
            command(json!({
                "procedure": "create",
                "input": {
                    "contentTypeId": "note",
                    "version": "1",
                    "data": { "title": "hi" },
                    "options": { "id": "42" }
                }
            })),
            &request,
        )
        .await
        .unwrap();
    assert_eq!(extract_item(&created)["id"], "42");

    let fetched = executor
        .execute(
            command(json!({
                "procedure": "get",
                "input": { "contentTypeId": "note", "id": "42", "version": "1", "options": {} }
            })),
            &request,
        )
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn case_accepts_both_versions() {
    let executor = create_executor();
    let request = RequestContext::new();

    for version in ["1", "2"] {
        let result = executor
            .execute(
                command(json!({
                    "procedure": "search",
                    "input": { "contentTypeId": "case", "version": version }
                })),
                &request,
            )
            .await;
        assert!(matches!(result, Ok(Output::SearchResults(_))), "version {}", version);
    }
}

#[tokio::test]
async fn update_and_delete_round() {
    let executor = create_executor();
    let request = RequestContext::new();

    executor
        .execute(
            command(json!({
                "procedure": "create",
                "input": { "contentTypeId": "note", "version": 1, "data": {"title": "a"}, "options": {"id": "n1"} }
            })),
            &request,
        )
        .await
        .unwrap();

    let updated = executor
        .execute(
            command(json!({
                "procedure": "update",
                "input": { "contentTypeId": "note", "id": "n1", "version": 1, "data": {"title": "b"} }
            })),
            &request,
        )
        .await
        .unwrap();
    assert_eq!(extract_item(&updated)["title"], "b");

    let deleted = executor
        .execute(
            command(json!({
                "procedure": "delete",
                "input": { "contentTypeId": "note", "id": "n1", "version": 1 }
            })),
            &request,
        )
        .await
        .unwrap();
    assert!(matches!(deleted, Output::Deleted(d) if d.success));
}

#[tokio::test]
async fn bulk_get_mixes_hits_and_misses() {
    let executor = create_executor();
    let request = RequestContext::new();

    executor
        .execute(
            command(json!({
                "procedure": "create",
                "input": { "contentTypeId": "note", "version": 1, "data": {}, "options": {"id": "present"} }
            })),
            &request,
        )
        .await
        .unwrap();

    let output = executor
        .execute(
            command(json!({
                "procedure": "bulkGet",
                "input": { "contentTypeId": "note", "ids": ["present", "absent"], "version": 1 }
            })),
            &request,
        )
        .await
        .unwrap();

    match output {
        Output::BulkItems(result) => {
            assert_eq!(result.hits[0].id, "present");
            assert!(result.hits[0].item.is_some());
            assert_eq!(result.hits[1].id, "absent");
            assert!(result.hits[1].error.as_ref().unwrap().is_not_found());
        }
        other => panic!("Expected BulkItems, got {:?}", other),
    }
}
