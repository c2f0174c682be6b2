//! Factories for CRUD implementations
//!
//! A plugin contributes a [`CrudFactory`] instead of a constructed
//! implementation. The registry calls [`CrudFactory::create`] with the
//! already-resolved [`Services`], so wiring is explicit and only the
//! construction itself is deferred.

use std::sync::Arc;

use contentdb_core::{ContentTypeId, Result, Version};

use crate::crud::ContentCrud;
use crate::services::Services;

/// Builds the CRUD implementation for one content type.
pub trait CrudFactory: Send + Sync {
    /// Content type this factory provides
    fn content_type_id(&self) -> ContentTypeId;

    /// Newest version the implementation understands
    fn latest_version(&self) -> Version;

    /// Construct the implementation.
    ///
    /// Returns an error if a required service is unavailable; the content
    /// type is then not registered.
    fn create(&self, services: &Services) -> Result<Arc<dyn ContentCrud>>;
}
