//! Storage context construction
//!
//! A [`StorageContext`] is the addressing value handed to a CRUD
//! implementation: which content type, which version the caller speaks, and
//! the ambient request data. It is built fresh for every dispatch and owned
//! by that call.

use serde::{Deserialize, Serialize};

use crate::types::{ContentTypeId, RequestContext, Version};

/// Request-scoped storage addressing.
///
/// Never cached, pooled, or shared between requests. Two contexts built from
/// equal inputs compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageContext {
    /// Content type the operation targets
    pub content_type_id: ContentTypeId,
    /// Version the caller expects for input and output
    pub version: Version,
    /// Ambient request data
    pub request: RequestContext,
}

impl StorageContext {
    /// Build a context for one dispatch.
    ///
    /// Pure: no I/O, no shared state, no reference to the inputs is retained.
    pub fn build(
        content_type_id: &ContentTypeId,
        version: Version,
        request: &RequestContext,
    ) -> Self {
        StorageContext {
            content_type_id: content_type_id.clone(),
            version,
            request: request.clone(),
        }
    }
}
