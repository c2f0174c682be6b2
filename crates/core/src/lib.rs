//! Core types for ContentDB
//!
//! This crate defines the foundational types shared by the registry, the
//! CRUD implementations and the dispatcher:
//! - ContentTypeId / Version: request addressing
//! - RequestContext: ambient per-request data
//! - StorageContext: per-dispatch value handed to an implementation
//! - Capability results: BulkGetResult, DeleteResult, SearchQuery, SearchResult
//! - Error: the error taxonomy shared by every layer
//! - Limits: identifier and payload size limits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod limits;
pub mod results;
pub mod types;

pub use context::StorageContext;
pub use error::{Error, Result};
pub use limits::{LimitError, Limits};
pub use results::{
    BulkGetHit, BulkGetResult, DeleteResult, Pagination, SearchQuery, SearchResult, TagFilter,
};
pub use types::{ContentTypeId, Options, RequestContext, Version};

/// JSON value type used for content items
pub use serde_json::Value;
