//! Integration tests for `AppContext`.
//!
//! Relocated from an inline `#[cfg(test)]` module so the composition can be
//! tested against the real `pethub-storage` adapters without creating a
//! dev-dependency cycle (storage depends on this crate).

use pethub_application::{AppContext, CatalogEvent};
use pethub_storage::{MemoryCatalogStore, MemoryCounterStore};
use pethub_testing::fixtures;
use std::sync::Arc;

fn context() -> AppContext {
    AppContext::with_defaults(
        Arc::new(MemoryCatalogStore::new()),
        Arc::new(MemoryCounterStore::new()),
    )
}

#[tokio::test]
async fn test_context_composes_independent_services() {
    let context = context();

    context
        .catalog_service
        .create(fixtures::fido())
        .await
        .unwrap();
    let hits = context.counter_service.hit().await.unwrap();

    // Counter state is unaffected by catalog operations
    assert_eq!(hits, 1);
    context.catalog_service.reset().await.unwrap();
    assert_eq!(context.counter_service.current().await.unwrap(), 1);
}

#[tokio::test]
async fn test_subscribe_sees_service_events() {
    let context = context();
    let mut rx = context.subscribe_catalog_events();

    let pet = context
        .catalog_service
        .create(fixtures::fido())
        .await
        .unwrap();

    assert_eq!(rx.try_recv().unwrap(), CatalogEvent::Created { pet });
}
