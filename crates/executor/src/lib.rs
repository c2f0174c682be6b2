//! # ContentDB Executor
//!
//! The public API for ContentDB - typed, versioned CRUD over pluggable
//! content types.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - validates and dispatches procedures to content types
//! - [`Command`]/[`Output`] - the procedure set and its results
//! - [`ContentClient`] - typed per-request wrapper
//! - Registry, services and configuration re-exported from the engine
//!
//! ## Quick Start
//!
//! ```text
//! use contentdb_executor::*;
//!
//! let services = Services::new(ContentConfig::default())?;
//! let mut registry = ContentRegistry::new();
//! registry.register_factory(&MemoryStorageFactory::new("note".into(), Version::INITIAL), &services)?;
//!
//! let executor = Arc::new(Executor::new(Arc::new(registry), Arc::new(services)));
//! let client = ContentClient::new(executor, RequestContext::new());
//!
//! let note = client.create("note", Version::INITIAL, json!({"title": "hi"}), None).await?;
//! ```
//!
//! ## Procedures
//!
//! | Procedure | Use Case |
//! |-----------|----------|
//! | **get** | Read one item |
//! | **bulkGet** | Read many items, per-item errors |
//! | **create** | Store a new item |
//! | **update** | Change an existing item |
//! | **delete** | Remove an item |
//! | **search** | Text/tag search with paging |

#![warn(missing_docs)]

mod client;
mod command;
mod executor;
mod handlers;
mod output;
mod schema;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use client::ContentClient;
pub use command::{BulkGetIn, Command, CreateIn, DeleteIn, GetIn, SearchIn, UpdateIn};
pub use executor::Executor;
pub use output::Output;
pub use schema::SchemaValidator;

// Re-export core types so users don't need contentdb-core directly
pub use contentdb_core::{
    BulkGetHit, BulkGetResult, ContentTypeId, DeleteResult, Error, Limits, Options, Pagination,
    RequestContext, SearchQuery, SearchResult, StorageContext, TagFilter, Value, Version,
};

// Re-export engine types so users don't need contentdb-engine directly
pub use contentdb_engine::{
    BuildInfo, ContentConfig, ContentCrud, ContentDefinition, ContentRegistry, CrudFactory,
    MemoryStorage, MemoryStorageFactory, Services, CONFIG_FILE_NAME, DEFAULT_SPACE,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
