//! Command enum defining all content procedures.
//!
//! Each procedure takes a typed input that mirrors its wire payload.
//! Commands are:
//! - **Self-contained**: All parameters needed for dispatch are in the input
//! - **Serializable**: `{"procedure": "get", "input": {...}}` on the wire
//! - **Typed**: No generic fallback, every procedure has explicit types

use serde::{Deserialize, Serialize};

use contentdb_core::{ContentTypeId, Options, SearchQuery, Value, Version};

/// Input of the `get` procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetIn {
    /// Content type to route to
    pub content_type_id: ContentTypeId,
    /// Item id
    pub id: String,
    /// Version the caller speaks
    pub version: Version,
    /// Passed to the implementation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// Input of the `bulkGet` procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BulkGetIn {
    /// Content type to route to
    pub content_type_id: ContentTypeId,
    /// Item ids, answered in this order
    pub ids: Vec<String>,
    /// Version the caller speaks
    pub version: Version,
    /// Passed to the implementation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// Input of the `create` procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateIn {
    /// Content type to route to
    pub content_type_id: ContentTypeId,
    /// Item fields
    pub data: Value,
    /// Version the caller speaks
    pub version: Version,
    /// Passed to the implementation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// Input of the `update` procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateIn {
    /// Content type to route to
    pub content_type_id: ContentTypeId,
    /// Item id
    pub id: String,
    /// Item fields
    pub data: Value,
    /// Version the caller speaks
    pub version: Version,
    /// Passed to the implementation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// Input of the `delete` procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteIn {
    /// Content type to route to
    pub content_type_id: ContentTypeId,
    /// Item id
    pub id: String,
    /// Version the caller speaks
    pub version: Version,
    /// Passed to the implementation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// Input of the `search` procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchIn {
    /// Content type to route to
    pub content_type_id: ContentTypeId,
    /// Search criteria; empty matches everything
    #[serde(default)]
    pub query: SearchQuery,
    /// Version the caller speaks
    pub version: Version,
    /// Passed to the implementation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// A procedure call.
///
/// # Procedures
///
/// | Procedure | Capability | Returns |
/// |-----------|------------|---------|
/// | `get` | `ContentCrud::get` | `Output::Item` |
/// | `bulkGet` | `ContentCrud::bulk_get` | `Output::BulkItems` |
/// | `create` | `ContentCrud::create` | `Output::Item` |
/// | `update` | `ContentCrud::update` | `Output::Item` |
/// | `delete` | `ContentCrud::delete` | `Output::Deleted` |
/// | `search` | `ContentCrud::search` | `Output::SearchResults` |
///
/// # Example
///
/// ```ignore
/// use contentdb_executor::{Command, GetIn};
///
/// let cmd = Command::Get(GetIn {
///     content_type_id: "note".into(),
///     id: "42".into(),
///     version: Version::INITIAL,
///     options: None,
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "procedure", content = "input", rename_all = "camelCase")]
pub enum Command {
    /// Read one item
    Get(GetIn),
    /// Read several items
    BulkGet(BulkGetIn),
    /// Create an item
    Create(CreateIn),
    /// Update an item
    Update(UpdateIn),
    /// Delete an item
    Delete(DeleteIn),
    /// Search items of one content type
    Search(SearchIn),
}

impl Command {
    /// Wire name of the procedure
    pub fn procedure(&self) -> &'static str {
        match self {
            Command::Get(_) => "get",
            Command::BulkGet(_) => "bulkGet",
            Command::Create(_) => "create",
            Command::Update(_) => "update",
            Command::Delete(_) => "delete",
            Command::Search(_) => "search",
        }
    }

    /// Content type the command targets
    pub fn content_type_id(&self) -> &ContentTypeId {
        match self {
            Command::Get(i) => &i.content_type_id,
            Command::BulkGet(i) => &i.content_type_id,
            Command::Create(i) => &i.content_type_id,
            Command::Update(i) => &i.content_type_id,
            Command::Delete(i) => &i.content_type_id,
            Command::Search(i) => &i.content_type_id,
        }
    }

    /// Version the caller expects
    pub fn version(&self) -> Version {
        match self {
            Command::Get(i) => i.version,
            Command::BulkGet(i) => i.version,
            Command::Create(i) => i.version,
            Command::Update(i) => i.version,
            Command::Delete(i) => i.version,
            Command::Search(i) => i.version,
        }
    }
}
