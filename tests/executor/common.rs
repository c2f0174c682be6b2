//! Common test utilities for executor tests

use std::sync::Arc;

use contentdb::{
    BuildInfo, ContentClient, ContentConfig, ContentRegistry, Executor, MemoryStorageFactory,
    Output, RequestContext, Services, Version,
};

/// Route `tracing` output to the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Initialized services with default configuration
pub fn create_services() -> Services {
    let services = Services::new(ContentConfig::default()).unwrap();
    services
        .init(BuildInfo {
            branch: "main".into(),
            version: "8.12.0".into(),
            build_flavor: "traditional".into(),
            prebuilt_package_version: None,
        })
        .unwrap();
    services
}

/// Executor with in-memory "note" (latest v1) and "case" (latest v2) types
pub fn create_executor() -> Arc<Executor> {
    init_tracing();
    let services = create_services();
    let mut registry = ContentRegistry::new();
    registry
        .register_factory(&MemoryStorageFactory::new("note".into(), Version::INITIAL), &services)
        .unwrap();
    registry
        .register_factory(
            &MemoryStorageFactory::new("case".into(), Version::new(2).unwrap()),
            &services,
        )
        .unwrap();
    Arc::new(Executor::new(Arc::new(registry), Arc::new(services)))
}

/// Client over a fresh executor in the default space
pub fn create_client() -> ContentClient {
    ContentClient::new(create_executor(), RequestContext::new())
}

/// Extract the item from Output::Item
#[allow(dead_code)]
pub fn extract_item(output: &Output) -> &serde_json::Value {
    match output {
        Output::Item(item) => item,
        _ => panic!("Expected Output::Item, got {:?}", output),
    }
}
