//! Capability inputs and results
//!
//! Items are plain JSON values: their shape is owned by the content type.
//! The wrappers here only describe the envelope each capability returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// One entry of a bulk get. Exactly one of `item` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkGetHit {
    /// Requested id
    pub id: String,
    /// The item, when it was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Value>,
    /// Per-item failure (typically `ItemNotFound`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

impl BulkGetHit {
    /// A found item
    pub fn found(id: impl Into<String>, item: Value) -> Self {
        BulkGetHit {
            id: id.into(),
            item: Some(item),
            error: None,
        }
    }

    /// A failed lookup
    pub fn failed(id: impl Into<String>, error: Error) -> Self {
        BulkGetHit {
            id: id.into(),
            item: None,
            error: Some(error),
        }
    }
}

/// Result of `bulk_get`, hits in request order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulkGetResult {
    /// One hit per requested id
    pub hits: Vec<BulkGetHit>,
}

/// Result of `delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// True if an item was removed
    pub success: bool,
}

/// Tag filter for search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagFilter {
    /// Items must carry every one of these tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<String>,
    /// Items must carry none of these tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<String>,
}

/// Search request passed to a content type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text to match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Tag filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagFilter>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Opaque cursor from a previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl SearchQuery {
    /// Query matching the given text
    pub fn text(text: impl Into<String>) -> Self {
        SearchQuery {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the cursor
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Paging information for a search result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of matches across all pages
    pub total: u64,
    /// Cursor for the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Result of `search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching items for this page
    pub hits: Vec<Value>,
    /// Paging information
    pub pagination: Pagination,
}
