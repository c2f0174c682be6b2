//! In-memory reference implementation of [`ContentCrud`]
//!
//! Items are JSON objects keyed by `(space, id)`; requests without a space
//! use [`DEFAULT_SPACE`]. Each stored item carries `id`, `createdAt` and
//! `updatedAt` alongside the caller's fields.
//!
//! Recognised options:
//! - `create`: `id` (string) to choose the id instead of generating a UUID
//! - `update`: `upsert` (bool) to create the item when it does not exist
//!
//! Input shape is checked before dispatch; anything malformed that still
//! reaches this store is reported as `Internal`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use contentdb_core::{
    BulkGetHit, BulkGetResult, ContentTypeId, DeleteResult, Error, Options, Pagination, Result,
    SearchQuery, SearchResult, StorageContext, TagFilter, Version,
};

use crate::crud::ContentCrud;
use crate::factory::CrudFactory;
use crate::services::Services;

/// Space used when the request context names none
pub const DEFAULT_SPACE: &str = "default";

const RESERVED_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

type ItemKey = (String, String);

/// In-memory storage for one content type
pub struct MemoryStorage {
    content_type: ContentTypeId,
    default_limit: u32,
    items: RwLock<BTreeMap<ItemKey, Value>>,
}

impl MemoryStorage {
    /// Create empty storage with a default page size of 20
    pub fn new(content_type: ContentTypeId) -> Self {
        Self::with_default_limit(content_type, 20)
    }

    /// Create empty storage with the given default page size
    pub fn with_default_limit(content_type: ContentTypeId, default_limit: u32) -> Self {
        MemoryStorage {
            content_type,
            default_limit: default_limit.max(1),
            items: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored items across all spaces
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn key(ctx: &StorageContext, id: &str) -> ItemKey {
        (space_of(ctx).to_string(), id.to_string())
    }

    fn not_found(&self, id: &str) -> Error {
        Error::item_not_found(self.content_type.as_str(), id)
    }
}

fn space_of(ctx: &StorageContext) -> &str {
    ctx.request.space.as_deref().unwrap_or(DEFAULT_SPACE)
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn into_object(data: Value) -> Result<Map<String, Value>> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(Error::internal(format!(
            "item data must be an object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn strip_reserved(map: &mut Map<String, Value>) {
    for field in RESERVED_FIELDS {
        map.remove(field);
    }
}

fn matches_text(item: &Value, text: &str) -> bool {
    let needle = text.to_lowercase();
    match item {
        Value::Object(map) => map
            .iter()
            .filter(|(k, _)| !RESERVED_FIELDS.contains(&k.as_str()))
            .any(|(_, v)| matches!(v, Value::String(s) if s.to_lowercase().contains(&needle))),
        _ => false,
    }
}

fn matches_tags(item: &Value, filter: &TagFilter) -> bool {
    let tags: Vec<&str> = item
        .get("tags")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    filter.included.iter().all(|t| tags.contains(&t.as_str()))
        && !filter.excluded.iter().any(|t| tags.contains(&t.as_str()))
}

fn parse_cursor(cursor: Option<&str>) -> Result<usize> {
    match cursor {
        None => Ok(0),
        Some(c) => c
            .parse::<usize>()
            .map_err(|_| Error::internal(format!("invalid cursor '{}'", c))),
    }
}

#[async_trait]
impl ContentCrud for MemoryStorage {
    async fn get(&self, ctx: &StorageContext, id: &str, _options: Option<Options>) -> Result<Value> {
        self.items
            .read()
            .get(&Self::key(ctx, id))
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    async fn bulk_get(
        &self,
        ctx: &StorageContext,
        ids: &[String],
        _options: Option<Options>,
    ) -> Result<BulkGetResult> {
        let items = self.items.read();
        let hits = ids
            .iter()
            .map(|id| match items.get(&Self::key(ctx, id)) {
                Some(item) => BulkGetHit::found(id.clone(), item.clone()),
                None => BulkGetHit::failed(id.clone(), self.not_found(id)),
            })
            .collect();
        Ok(BulkGetResult { hits })
    }

    async fn create(
        &self,
        ctx: &StorageContext,
        data: Value,
        options: Option<Options>,
    ) -> Result<Value> {
        let mut fields = into_object(data)?;
        strip_reserved(&mut fields);

        let id = match options.as_ref().and_then(|o| o.get("id")) {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(_) => return Err(Error::internal("option 'id' must be a non-empty string")),
            None => Uuid::new_v4().to_string(),
        };

        let key = Self::key(ctx, &id);
        let mut items = self.items.write();
        if items.contains_key(&key) {
            return Err(Error::conflict(format!(
                "{} '{}' already exists",
                self.content_type, id
            )));
        }

        let ts = now();
        fields.insert("id".into(), Value::String(id.clone()));
        fields.insert("createdAt".into(), Value::String(ts.clone()));
        fields.insert("updatedAt".into(), Value::String(ts));
        let item = Value::Object(fields);
        items.insert(key, item.clone());

        debug!(content_type = %self.content_type, id = %id, space = space_of(ctx), "created item");
        Ok(item)
    }

    async fn update(
        &self,
        ctx: &StorageContext,
        id: &str,
        data: Value,
        options: Option<Options>,
    ) -> Result<Value> {
        let mut changes = into_object(data)?;
        strip_reserved(&mut changes);
        let upsert = options
            .as_ref()
            .and_then(|o| o.get("upsert"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let key = Self::key(ctx, id);
        let mut items = self.items.write();
        let ts = now();
        let item = match items.get_mut(&key) {
            Some(Value::Object(existing)) => {
                for (k, v) in changes {
                    existing.insert(k, v);
                }
                existing.insert("updatedAt".into(), Value::String(ts));
                Value::Object(existing.clone())
            }
            Some(_) => {
                return Err(Error::internal(format!(
                    "stored {} '{}' is not an object",
                    self.content_type, id
                )))
            }
            None if upsert => {
                changes.insert("id".into(), Value::String(id.to_string()));
                changes.insert("createdAt".into(), Value::String(ts.clone()));
                changes.insert("updatedAt".into(), Value::String(ts));
                let item = Value::Object(changes);
                items.insert(key, item.clone());
                item
            }
            None => return Err(self.not_found(id)),
        };

        debug!(content_type = %self.content_type, id = %id, "updated item");
        Ok(item)
    }

    async fn delete(
        &self,
        ctx: &StorageContext,
        id: &str,
        _options: Option<Options>,
    ) -> Result<DeleteResult> {
        match self.items.write().remove(&Self::key(ctx, id)) {
            Some(_) => {
                debug!(content_type = %self.content_type, id = %id, "deleted item");
                Ok(DeleteResult { success: true })
            }
            None => Err(self.not_found(id)),
        }
    }

    async fn search(
        &self,
        ctx: &StorageContext,
        query: &SearchQuery,
        _options: Option<Options>,
    ) -> Result<SearchResult> {
        let offset = parse_cursor(query.cursor.as_deref())?;
        let limit = query.limit.unwrap_or(self.default_limit).max(1) as usize;
        let space = space_of(ctx);

        let items = self.items.read();
        let matching: Vec<&Value> = items
            .iter()
            .filter(|((s, _), _)| s == space)
            .map(|(_, item)| item)
            .filter(|item| match query.text.as_deref() {
                Some(text) if !text.is_empty() => matches_text(item, text),
                _ => true,
            })
            .filter(|item| query.tags.as_ref().map_or(true, |f| matches_tags(item, f)))
            .collect();

        let total = matching.len();
        let hits: Vec<Value> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        let next = offset + hits.len();
        let cursor = (next < total).then(|| next.to_string());

        Ok(SearchResult {
            hits,
            pagination: Pagination {
                total: total as u64,
                cursor,
            },
        })
    }

    fn name(&self) -> &'static str {
        "MemoryStorage"
    }
}

/// Registers a [`MemoryStorage`] for a content type
pub struct MemoryStorageFactory {
    content_type: ContentTypeId,
    latest_version: Version,
}

impl MemoryStorageFactory {
    /// Create a factory for the given content type
    pub fn new(content_type: ContentTypeId, latest_version: Version) -> Self {
        MemoryStorageFactory {
            content_type,
            latest_version,
        }
    }
}

impl CrudFactory for MemoryStorageFactory {
    fn content_type_id(&self) -> ContentTypeId {
        self.content_type.clone()
    }

    fn latest_version(&self) -> Version {
        self.latest_version
    }

    fn create(&self, services: &Services) -> Result<Arc<dyn ContentCrud>> {
        Ok(Arc::new(MemoryStorage::with_default_limit(
            self.content_type.clone(),
            services.config().default_search_limit,
        )))
    }
}
