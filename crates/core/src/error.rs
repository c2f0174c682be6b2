//! Error types for content management dispatch
//!
//! A single error enum is shared by the dispatcher and every CRUD
//! implementation. Implementations return `Error` directly, so the dispatcher
//! propagates their errors with `?` and no conversion step can alter them.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Content management errors.
///
/// # Categories
///
/// | Category | Variants | Raised by |
/// |----------|----------|-----------|
/// | Not Found | `ContentTypeNotFound`, `ItemNotFound` | registry, implementations |
/// | Validation | `Validation` | schema layer, config loading |
/// | State | `Conflict`, `Uninitialized` | registry, services |
/// | Implementation | `Storage`, `Internal` | implementations |
///
/// Errors are serializable so they can cross a transport boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// No CRUD implementation is registered for the content type
    #[error("content type not found: {content_type}")]
    ContentTypeNotFound {
        /// Requested content type id
        content_type: String,
    },

    /// The implementation reports that the requested item does not exist
    #[error("{content_type} item not found: {id}")]
    ItemNotFound {
        /// Content type of the item
        content_type: String,
        /// Requested item id
        id: String,
    },

    // ==================== Validation ====================
    /// Input failed schema checks
    #[error("validation failed: {reason}")]
    Validation {
        /// What was wrong with the input
        reason: String,
    },

    // ==================== State ====================
    /// Conflicting registration or write
    #[error("conflict: {reason}")]
    Conflict {
        /// What conflicted
        reason: String,
    },

    /// A service was read before it was initialized
    #[error("{service} not initialized")]
    Uninitialized {
        /// Name of the missing service
        service: String,
    },

    // ==================== Implementation ====================
    /// Storage backend failure
    #[error("storage error: {reason}")]
    Storage {
        /// Backend failure description
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Invariant that was violated
        reason: String,
    },
}

impl Error {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Error::Validation {
            reason: reason.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(reason: impl Into<String>) -> Self {
        Error::Conflict {
            reason: reason.into(),
        }
    }

    /// Create a storage error
    pub fn storage(reason: impl Into<String>) -> Self {
        Error::Storage {
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal {
            reason: reason.into(),
        }
    }

    /// Create a content-type-not-found error
    pub fn content_type_not_found(content_type: impl Into<String>) -> Self {
        Error::ContentTypeNotFound {
            content_type: content_type.into(),
        }
    }

    /// Create an item-not-found error
    pub fn item_not_found(content_type: impl Into<String>, id: impl Into<String>) -> Self {
        Error::ItemNotFound {
            content_type: content_type.into(),
            id: id.into(),
        }
    }

    /// True for both unknown content types and missing items.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ContentTypeNotFound { .. } | Error::ItemNotFound { .. }
        )
    }

    /// True for errors produced by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Internal {
            reason: format!("serialization: {}", e),
        }
    }
}
