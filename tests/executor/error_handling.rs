//! Error Handling Tests
//!
//! Tests for error conditions in the executor layer.

use crate::common::*;
use contentdb::{Error, SearchQuery, Version};
use serde_json::json;

#[tokio::test]
async fn get_from_unregistered_type_fails() {
    let client = create_client();

    match client.get("unknown-type", "42", Version::INITIAL).await {
        Err(Error::ContentTypeNotFound { content_type }) => {
            assert_eq!(content_type, "unknown-type");
        }
        other => panic!("Expected ContentTypeNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn get_missing_item_fails() {
    let client = create_client();

    match client.get("note", "nope", Version::INITIAL).await {
        Err(Error::ItemNotFound { content_type, id }) => {
            assert_eq!(content_type, "note");
            assert_eq!(id, "nope");
        }
        other => panic!("Expected ItemNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn version_above_latest_fails_validation() {
    let client = create_client();

    let err = client
        .get("note", "42", Version::new(2).unwrap())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::validation("Invalid version. Latest version is [1]")
    );
}

#[tokio::test]
async fn duplicate_create_is_conflict() {
    let client = create_client();
    let mut options = contentdb::Options::new();
    options.insert("id".into(), json!("dup"));

    client
        .create("note", Version::INITIAL, json!({}), Some(options.clone()))
        .await
        .unwrap();
    let err = client
        .create("note", Version::INITIAL, json!({}), Some(options))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
}

#[tokio::test]
async fn malformed_input_is_rejected_before_storage() {
    let client = create_client();

    let err = client
        .create("note", Version::INITIAL, json!("just a string"), None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::validation("item data must be an object, got string")
    );

    let mut numeric_id = contentdb::Options::new();
    numeric_id.insert("id".into(), json!(7));
    let err = client
        .create("note", Version::INITIAL, json!({}), Some(numeric_id))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::validation("option 'id' must be a non-empty string")
    );

    let err = client
        .search("note", Version::INITIAL, SearchQuery::default().with_cursor("abc"))
        .await
        .unwrap_err();
    assert_eq!(err, Error::validation("invalid cursor 'abc'"));

    // Nothing reached the store
    let all = client
        .search("note", Version::INITIAL, SearchQuery::default())
        .await
        .unwrap();
    assert_eq!(all.pagination.total, 0);
}

#[tokio::test]
async fn search_limit_above_maximum_fails() {
    let client = create_client();
    let err = client
        .search("note", Version::INITIAL, SearchQuery::default().with_limit(1000))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn empty_bulk_get_fails() {
    let client = create_client();
    let err = client.bulk_get("note", &[], Version::INITIAL).await.unwrap_err();
    assert!(err.is_validation());
}
