//! ContentDB - typed, versioned CRUD dispatch over pluggable content types
//!
//! Each content kind ("dashboard", "case", ...) registers one implementation
//! of the [`ContentCrud`] capability set. Procedures (get, bulkGet, create,
//! update, delete, search) are validated, routed by content type id, and
//! answered by that implementation.
//!
//! # Quick Start
//!
//! ```ignore
//! use contentdb::*;
//!
//! let services = Services::new(ContentConfig::default())?;
//! let mut registry = ContentRegistry::new();
//! registry.register_factory(&MemoryStorageFactory::new("note".into(), Version::INITIAL), &services)?;
//!
//! let executor = Arc::new(Executor::new(Arc::new(registry), Arc::new(services)));
//! let client = ContentClient::new(executor, RequestContext::new());
//! let note = client.create("note", Version::INITIAL, json!({"title": "hi"}), None).await?;
//! ```
//!
//! # Architecture
//!
//! All procedures go through the [`Executor`], which validates input and
//! dispatches to the registry. The [`ContentClient`] provides a typed
//! per-request interface on top of it.

// Re-export the public API from contentdb-executor
pub use contentdb_executor::*;
