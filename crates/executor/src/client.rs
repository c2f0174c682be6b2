//! Typed client over the [`Executor`].
//!
//! [`ContentClient`] binds an executor to one request context and exposes
//! each procedure as a method returning its natural type instead of
//! [`Output`].
//!
//! ```ignore
//! let client = ContentClient::new(executor, RequestContext::new().with_space("ops"));
//! let note = client.create("note", Version::INITIAL, json!({"title": "hi"}), None).await?;
//! let same = client.get("note", note["id"].as_str().unwrap(), Version::INITIAL).await?;
//! ```

use std::sync::Arc;

use contentdb_core::{
    BulkGetResult, ContentTypeId, DeleteResult, Error, Options, RequestContext, SearchQuery,
    SearchResult, Value, Version,
};

use crate::command::{BulkGetIn, CreateIn, DeleteIn, GetIn, SearchIn, UpdateIn};
use crate::{Command, Executor, Output, Result};

/// Request-scoped typed wrapper around a shared [`Executor`].
#[derive(Debug, Clone)]
pub struct ContentClient {
    executor: Arc<Executor>,
    request: RequestContext,
}

impl ContentClient {
    /// Bind an executor to a request context
    pub fn new(executor: Arc<Executor>, request: RequestContext) -> Self {
        ContentClient { executor, request }
    }

    /// The same executor bound to another request
    pub fn for_request(&self, request: RequestContext) -> Self {
        ContentClient {
            executor: Arc::clone(&self.executor),
            request,
        }
    }

    /// The bound request context
    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    /// Read one item
    pub async fn get(&self, content_type: &str, id: &str, version: Version) -> Result<Value> {
        self.get_with_options(content_type, id, version, None).await
    }

    /// Read one item, forwarding options to the implementation
    pub async fn get_with_options(
        &self,
        content_type: &str,
        id: &str,
        version: Version,
        options: Option<Options>,
    ) -> Result<Value> {
        let cmd = Command::Get(GetIn {
            content_type_id: ContentTypeId::from(content_type),
            id: id.to_string(),
            version,
            options,
        });
        match self.executor.execute(cmd, &self.request).await? {
            Output::Item(item) => Ok(item),
            other => Err(unexpected("get", &other)),
        }
    }

    /// Read several items
    pub async fn bulk_get(
        &self,
        content_type: &str,
        ids: &[&str],
        version: Version,
    ) -> Result<BulkGetResult> {
        let cmd = Command::BulkGet(BulkGetIn {
            content_type_id: ContentTypeId::from(content_type),
            ids: ids.iter().map(|id| id.to_string()).collect(),
            version,
            options: None,
        });
        match self.executor.execute(cmd, &self.request).await? {
            Output::BulkItems(result) => Ok(result),
            other => Err(unexpected("bulkGet", &other)),
        }
    }

    /// Create an item
    pub async fn create(
        &self,
        content_type: &str,
        version: Version,
        data: Value,
        options: Option<Options>,
    ) -> Result<Value> {
        let cmd = Command::Create(CreateIn {
            content_type_id: ContentTypeId::from(content_type),
            data,
            version,
            options,
        });
        match self.executor.execute(cmd, &self.request).await? {
            Output::Item(item) => Ok(item),
            other => Err(unexpected("create", &other)),
        }
    }

    /// Update an item
    pub async fn update(
        &self,
        content_type: &str,
        id: &str,
        version: Version,
        data: Value,
        options: Option<Options>,
    ) -> Result<Value> {
        let cmd = Command::Update(UpdateIn {
            content_type_id: ContentTypeId::from(content_type),
            id: id.to_string(),
            data,
            version,
            options,
        });
        match self.executor.execute(cmd, &self.request).await? {
            Output::Item(item) => Ok(item),
            other => Err(unexpected("update", &other)),
        }
    }

    /// Delete an item
    pub async fn delete(&self, content_type: &str, id: &str, version: Version) -> Result<DeleteResult> {
        let cmd = Command::Delete(DeleteIn {
            content_type_id: ContentTypeId::from(content_type),
            id: id.to_string(),
            version,
            options: None,
        });
        match self.executor.execute(cmd, &self.request).await? {
            Output::Deleted(result) => Ok(result),
            other => Err(unexpected("delete", &other)),
        }
    }

    /// Search items of one content type
    pub async fn search(
        &self,
        content_type: &str,
        version: Version,
        query: SearchQuery,
    ) -> Result<SearchResult> {
        let cmd = Command::Search(SearchIn {
            content_type_id: ContentTypeId::from(content_type),
            query,
            version,
            options: None,
        });
        match self.executor.execute(cmd, &self.request).await? {
            Output::SearchResults(result) => Ok(result),
            other => Err(unexpected("search", &other)),
        }
    }
}

fn unexpected(procedure: &str, output: &Output) -> Error {
    Error::internal(format!("Unexpected output for {}: {:?}", procedure, output))
}
