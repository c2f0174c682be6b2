//! Content type registry
//!
//! Maps a content type id to its CRUD implementation and latest version.
//!
//! Registration takes `&mut self`, so it can only happen while the registry
//! is exclusively owned during startup. The dispatcher holds it behind an
//! `Arc`, after which it is read-only and lookups need no locking.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = ContentRegistry::new();
//! registry.register("note".into(), Version::INITIAL, Arc::new(MemoryStorage::new("note".into())))?;
//! registry.register_factory(&MemoryStorageFactory::new("case".into(), Version::new(2)?), &services)?;
//!
//! let registry = Arc::new(registry);
//! let crud = registry.get_crud(&"note".into())?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use contentdb_core::{ContentTypeId, Error, Result, Version};
use tracing::info;

use crate::crud::ContentCrud;
use crate::factory::CrudFactory;
use crate::services::Services;

/// A registered content type
#[derive(Clone)]
pub struct ContentDefinition {
    /// Dispatch key
    pub id: ContentTypeId,
    /// Newest version this content type understands
    pub latest_version: Version,
    /// Implementation of the capability set
    pub crud: Arc<dyn ContentCrud>,
}

impl std::fmt::Debug for ContentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDefinition")
            .field("id", &self.id)
            .field("latest_version", &self.latest_version)
            .field("crud", &self.crud.name())
            .finish()
    }
}

/// Registry of content types
pub struct ContentRegistry {
    types: HashMap<ContentTypeId, ContentDefinition>,
}

impl ContentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ContentRegistry {
            types: HashMap::new(),
        }
    }

    /// Register an implementation for a content type.
    ///
    /// Fails with `Validation` for an empty id and `Conflict` if the id is
    /// already registered.
    pub fn register(
        &mut self,
        id: ContentTypeId,
        latest_version: Version,
        crud: Arc<dyn ContentCrud>,
    ) -> Result<()> {
        if id.is_empty() {
            return Err(Error::validation("content type id must not be empty"));
        }
        if self.types.contains_key(&id) {
            return Err(Error::conflict(format!(
                "content type '{}' is already registered",
                id
            )));
        }

        info!(
            content_type = %id,
            latest_version = %latest_version,
            crud = crud.name(),
            "registered content type"
        );
        self.types.insert(
            id.clone(),
            ContentDefinition {
                id,
                latest_version,
                crud,
            },
        );
        Ok(())
    }

    /// Construct an implementation from a factory and register it.
    ///
    /// The factory receives already-resolved services; only construction
    /// is deferred to this call.
    pub fn register_factory(&mut self, factory: &dyn CrudFactory, services: &Services) -> Result<()> {
        let id = factory.content_type_id();
        if self.types.contains_key(&id) {
            return Err(Error::conflict(format!(
                "content type '{}' is already registered",
                id
            )));
        }
        let crud = factory.create(services)?;
        self.register(id, factory.latest_version(), crud)
    }

    /// Get the definition of a content type
    pub fn get(&self, id: &ContentTypeId) -> Option<&ContentDefinition> {
        self.types.get(id)
    }

    /// Resolve the implementation for a content type.
    ///
    /// Fails with `ContentTypeNotFound` when nothing is registered; there is
    /// no fallback implementation.
    pub fn get_crud(&self, id: &ContentTypeId) -> Result<Arc<dyn ContentCrud>> {
        self.types
            .get(id)
            .map(|def| Arc::clone(&def.crud))
            .ok_or_else(|| Error::content_type_not_found(id.as_str()))
    }

    /// Latest version of a registered content type
    pub fn latest_version(&self, id: &ContentTypeId) -> Option<Version> {
        self.types.get(id).map(|def| def.latest_version)
    }

    /// Check if a content type is registered
    pub fn is_registered(&self, id: &ContentTypeId) -> bool {
        self.types.contains_key(id)
    }

    /// All registered content type ids, sorted
    pub fn content_types(&self) -> Vec<ContentTypeId> {
        let mut ids: Vec<ContentTypeId> = self.types.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Get the number of registered content types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Remove a content type
    pub fn unregister(&mut self, id: &ContentTypeId) -> Option<ContentDefinition> {
        self.types.remove(id)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRegistry")
            .field("content_type_count", &self.types.len())
            .field("content_types", &self.content_types())
            .finish()
    }
}
