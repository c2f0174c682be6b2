//! Test modules for the executor crate.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    BulkGetHit, BulkGetResult, ContentCrud, ContentRegistry, DeleteResult, Error, Executor,
    Options, Pagination, SearchQuery, SearchResult, Services, StorageContext, Value, Version,
};


/// Route `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// One observed capability invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get {
        ctx: StorageContext,
        id: String,
        options: Option<Options>,
    },
    BulkGet {
        ctx: StorageContext,
        ids: Vec<String>,
    },
    Create {
        ctx: StorageContext,
        data: Value,
        options: Option<Options>,
    },
    Update {
        ctx: StorageContext,
        id: String,
        data: Value,
    },
    Delete {
        ctx: StorageContext,
        id: String,
    },
    Search {
        ctx: StorageContext,
        query: SearchQuery,
    },
}

/// Implementation that records every call and answers with a fixed item
/// or a fixed error.
pub struct RecordingCrud {
    calls: Mutex<Vec<Call>>,
    item: Value,
    failure: Option<Error>,
}

impl RecordingCrud {
    pub fn returning(item: Value) -> Arc<Self> {
        Arc::new(RecordingCrud {
            calls: Mutex::new(Vec::new()),
            item,
            failure: None,
        })
    }

    pub fn failing(error: Error) -> Arc<Self> {
        Arc::new(RecordingCrud {
            calls: Mutex::new(Vec::new()),
            item: Value::Null,
            failure: Some(error),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record<T>(&self, call: Call, ok: T) -> crate::Result<T> {
        self.calls.lock().push(call);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(ok),
        }
    }
}

#[async_trait]
impl ContentCrud for RecordingCrud {
    async fn get(&self, ctx: &StorageContext, id: &str, options: Option<Options>) -> crate::Result<Value> {
        let call = Call::Get {
            ctx: ctx.clone(),
            id: id.to_string(),
            options,
        };
        self.record(call, self.item.clone())
    }

    async fn bulk_get(
        &self,
        ctx: &StorageContext,
        ids: &[String],
        _options: Option<Options>,
    ) -> crate::Result<BulkGetResult> {
        let hits = ids
            .iter()
            .map(|id| BulkGetHit::found(id.clone(), self.item.clone()))
            .collect();
        let call = Call::BulkGet {
            ctx: ctx.clone(),
            ids: ids.to_vec(),
        };
        self.record(call, BulkGetResult { hits })
    }

    async fn create(
        &self,
        ctx: &StorageContext,
        data: Value,
        options: Option<Options>,
    ) -> crate::Result<Value> {
        let call = Call::Create {
            ctx: ctx.clone(),
            data,
            options,
        };
        self.record(call, self.item.clone())
    }

    async fn update(
        &self,
        ctx: &StorageContext,
        id: &str,
        data: Value,
        _options: Option<Options>,
    ) -> crate::Result<Value> {
        let call = Call::Update {
            ctx: ctx.clone(),
            id: id.to_string(),
            data,
        };
        self.record(call, self.item.clone())
    }

    async fn delete(
        &self,
        ctx: &StorageContext,
        id: &str,
        _options: Option<Options>,
    ) -> crate::Result<DeleteResult> {
        let call = Call::Delete {
            ctx: ctx.clone(),
            id: id.to_string(),
        };
        self.record(call, DeleteResult { success: true })
    }

    async fn search(
        &self,
        ctx: &StorageContext,
        query: &SearchQuery,
        _options: Option<Options>,
    ) -> crate::Result<SearchResult> {
        let call = Call::Search {
            ctx: ctx.clone(),
            query: query.clone(),
        };
        let result = SearchResult {
            hits: vec![self.item.clone()],
            pagination: Pagination {
                total: 1,
                cursor: None,
            },
        };
        self.record(call, result)
    }

    fn name(&self) -> &'static str {
        "RecordingCrud"
    }
}

/// Executor over the given content types, all at latest version 1.
pub fn executor_with(types: &[(&str, Arc<RecordingCrud>)]) -> Executor {
    init_tracing();
    let mut registry = ContentRegistry::new();
    for (id, crud) in types {
        registry
            .register((*id).into(), Version::INITIAL, crud.clone())
            .unwrap();
    }
    Executor::new(Arc::new(registry), Arc::new(Services::default()))
}
