//! CRUD capability contract for content types
//!
//! Every registered content type is backed by one [`ContentCrud`]
//! implementation. All capabilities are required methods, so an
//! implementation that forgets one does not compile.
//!
//! ## Usage
//!
//! ```rust,ignore
//! struct NoteStorage { /* ... */ }
//!
//! #[async_trait]
//! impl ContentCrud for NoteStorage {
//!     async fn get(&self, ctx: &StorageContext, id: &str, options: Option<Options>) -> Result<Value> {
//!         // Read the note, transform it to ctx.version, return it
//!     }
//!     // bulk_get, create, update, delete, search ...
//! }
//! ```

use async_trait::async_trait;
use contentdb_core::{
    BulkGetResult, DeleteResult, Options, Result, SearchQuery, SearchResult, StorageContext, Value,
};

/// Capability set implemented once per content type.
///
/// # Contract
///
/// - Implementations must not hold request state: everything request-scoped
///   arrives in the [`StorageContext`]
/// - `options` is forwarded verbatim from the caller; its keys are defined by
///   the implementation
/// - A missing item is reported as `Error::ItemNotFound`
/// - Any error returned is surfaced to the caller unchanged
#[async_trait]
pub trait ContentCrud: Send + Sync {
    /// Read one item
    async fn get(&self, ctx: &StorageContext, id: &str, options: Option<Options>) -> Result<Value>;

    /// Read several items. Missing ids become per-hit errors, not a failed call.
    async fn bulk_get(
        &self,
        ctx: &StorageContext,
        ids: &[String],
        options: Option<Options>,
    ) -> Result<BulkGetResult>;

    /// Create an item and return it as stored
    async fn create(
        &self,
        ctx: &StorageContext,
        data: Value,
        options: Option<Options>,
    ) -> Result<Value>;

    /// Update an item and return it as stored
    async fn update(
        &self,
        ctx: &StorageContext,
        id: &str,
        data: Value,
        options: Option<Options>,
    ) -> Result<Value>;

    /// Delete an item
    async fn delete(
        &self,
        ctx: &StorageContext,
        id: &str,
        options: Option<Options>,
    ) -> Result<DeleteResult>;

    /// Search items of this content type
    async fn search(
        &self,
        ctx: &StorageContext,
        query: &SearchQuery,
        options: Option<Options>,
    ) -> Result<SearchResult>;

    /// Short name for logging, e.g. "MemoryStorage"
    fn name(&self) -> &'static str;
}
