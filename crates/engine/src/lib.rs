//! Content engine for ContentDB
//!
//! This crate owns everything the dispatcher resolves against:
//! - ContentCrud: the capability contract every content type implements
//! - ContentRegistry: content type id -> implementation + latest version
//! - CrudFactory: explicit construction of implementations from services
//! - Services: build information and configuration, passed down explicitly
//! - ContentConfig: `contentdb.toml` settings
//! - MemoryStorage: in-memory reference implementation
//!
//! The engine never dispatches requests itself; that is the executor's job.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod crud;
pub mod factory;
pub mod memory;
pub mod registry;
pub mod services;

pub use config::{ContentConfig, CONFIG_FILE_NAME};
pub use crud::ContentCrud;
pub use factory::CrudFactory;
pub use memory::{MemoryStorage, MemoryStorageFactory, DEFAULT_SPACE};
pub use registry::{ContentDefinition, ContentRegistry};
pub use services::{BuildInfo, Services};
