//! Plugin Wiring Tests
//!
//! Factories, services and configuration feeding the registry.

use std::sync::Arc;

use async_trait::async_trait;
use contentdb::{
    BuildInfo, ContentConfig, ContentCrud, ContentRegistry, ContentTypeId, CrudFactory,
    DeleteResult, Error, Executor, MemoryStorageFactory, Options, RequestContext, Result,
    SearchQuery, SearchResult, Services, StorageContext, Value, Version, BulkGetResult,
    ContentClient, CONFIG_FILE_NAME,
};
use serde_json::json;
use tempfile::TempDir;

use crate::common::*;

/// Reports the platform branch it was built with on every read.
struct BuildStamped {
    branch: String,
}

#[async_trait]
impl ContentCrud for BuildStamped {
    async fn get(&self, ctx: &StorageContext, id: &str, _options: Option<Options>) -> Result<Value> {
        Ok(json!({
            "id": id,
            "branch": self.branch,
            "version": ctx.version,
        }))
    }

    async fn bulk_get(
        &self,
        _ctx: &StorageContext,
        _ids: &[String],
        _options: Option<Options>,
    ) -> Result<BulkGetResult> {
        Ok(BulkGetResult::default())
    }

    async fn create(&self, _ctx: &StorageContext, data: Value, _options: Option<Options>) -> Result<Value> {
        Ok(data)
    }

    async fn update(
        &self,
        _ctx: &StorageContext,
        _id: &str,
        data: Value,
        _options: Option<Options>,
    ) -> Result<Value> {
        Ok(data)
    }

    async fn delete(
        &self,
        _ctx: &StorageContext,
        _id: &str,
        _options: Option<Options>,
    ) -> Result<DeleteResult> {
        Ok(DeleteResult { success: true })
    }

    async fn search(
        &self,
        _ctx: &StorageContext,
        _query: &SearchQuery,
        _options: Option<Options>,
    ) -> Result<SearchResult> {
        Ok(SearchResult::default())
    }

    fn name(&self) -> &'static str {
        "build-stamped"
    }
}

struct BuildStampedFactory;

impl CrudFactory for BuildStampedFactory {
    fn content_type_id(&self) -> ContentTypeId {
        ContentTypeId::from("stamp")
    }

    fn latest_version(&self) -> Version {
        Version::INITIAL
    }

    fn create(&self, services: &Services) -> Result<Arc<dyn ContentCrud>> {
        Ok(Arc::new(BuildStamped {
            branch: services.branch()?.to_string(),
        }))
    }
}

#[tokio::test]
async fn factory_receives_initialized_services() {
    init_tracing();
    let services = create_services();
    let mut registry = ContentRegistry::new();
    registry.register_factory(&BuildStampedFactory, &services).unwrap();

    let executor = Arc::new(Executor::new(Arc::new(registry), Arc::new(services)));
    let client = ContentClient::new(executor, RequestContext::new());

    let item = client.get("stamp", "1", Version::INITIAL).await.unwrap();
    assert_eq!(item["branch"], "main");
    assert_eq!(item["version"], 1);
}

#[test]
fn factory_fails_before_services_init() {
    let services = Services::new(ContentConfig::default()).unwrap();
    let mut registry = ContentRegistry::new();

    let err = registry
        .register_factory(&BuildStampedFactory, &services)
        .unwrap_err();
    assert!(matches!(err, Error::Uninitialized { .. }));
    assert!(!registry.is_registered(&"stamp".into()));
}

#[test]
fn services_accessors_after_init() {
    let services = Services::new(ContentConfig::default()).unwrap();
    services
        .init(BuildInfo {
            branch: "8.x".into(),
            version: "8.13.0".into(),
            build_flavor: "serverless".into(),
            prebuilt_package_version: Some("8.13.0-SNAPSHOT".into()),
        })
        .unwrap();

    assert_eq!(services.branch().unwrap(), "8.x");
    assert_eq!(services.version().unwrap(), "8.13.0");
    assert_eq!(services.build_flavor().unwrap(), "serverless");
    assert_eq!(services.prebuilt_package_version(), Some("8.13.0-SNAPSHOT"));
}

#[test]
fn duplicate_factory_registration_is_conflict() {
    let services = create_services();
    let factory = MemoryStorageFactory::new("note".into(), Version::INITIAL);
    let mut registry = ContentRegistry::new();

    registry.register_factory(&factory, &services).unwrap();
    let err = registry.register_factory(&factory, &services).unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn config_file_limits_reach_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "max_bulk_get = 2\nstrict_versions = false\n").unwrap();

    let config = ContentConfig::from_file(&path).unwrap();
    let services = Services::new(config).unwrap();
    let mut registry = ContentRegistry::new();
    registry
        .register_factory(&MemoryStorageFactory::new("note".into(), Version::INITIAL), &services)
        .unwrap();
    let executor = Arc::new(Executor::new(Arc::new(registry), Arc::new(services)));
    let client = ContentClient::new(executor, RequestContext::new());

    let err = client
        .bulk_get("note", &["a", "b", "c"], Version::INITIAL)
        .await
        .unwrap_err();
    assert!(err.is_validation());

    // Lenient versions: a newer version reaches storage and fails there instead
    let err = client
        .get("note", "a", Version::new(3).unwrap())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
