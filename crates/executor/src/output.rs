//! Output enum for procedure results.
//!
//! Every procedure produces exactly one output variant. The wrapped value is
//! whatever the content type's implementation returned, untouched.

use serde::{Deserialize, Serialize};

use contentdb_core::{BulkGetResult, DeleteResult, SearchResult, Value};

/// Successful procedure results.
///
/// # Example
///
/// ```text
/// match executor.execute(cmd, &request).await? {
///     Output::Item(item) => println!("Found: {}", item),
///     _ => unreachable!("get always returns Item"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// A single item (get, create, update)
    Item(Value),

    /// Bulk get hits in request order
    BulkItems(BulkGetResult),

    /// Delete outcome
    Deleted(DeleteResult),

    /// Search page
    SearchResults(SearchResult),
}
