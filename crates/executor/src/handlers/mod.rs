//! Procedure handlers.
//!
//! Every handler has the same three steps: build a fresh
//! [`StorageContext`](contentdb_core::StorageContext), resolve the content
//! type's implementation from the registry, invoke one capability. Results
//! and errors are returned exactly as the implementation produced them.
//!
//! | Module | Procedures |
//! |--------|------------|
//! | `read` | get, bulkGet, search |
//! | `write` | create, update, delete |

pub mod read;
pub mod write;
