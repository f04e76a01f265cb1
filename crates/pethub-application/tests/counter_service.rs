//! Integration tests for `CounterService`.
//!
//! These exercise the service against the real in-memory adapter from
//! `pethub-storage`. They live here (rather than as an inline `#[cfg(test)]`
//! module) because `pethub-storage` depends on `pethub-application`; an inline
//! unit test would create a dev-dependency cycle that builds two copies of
//! `pethub-application` with incompatible trait types. Integration tests link
//! against the normal library, so the trait views match.

use pethub_application::CounterService;
use pethub_storage::MemoryCounterStore;
use std::sync::Arc;

fn service() -> CounterService {
    CounterService::new(Arc::new(MemoryCounterStore::new()))
}

#[tokio::test]
async fn test_counter_scenario() {
    let service = service();

    assert_eq!(service.current().await.unwrap(), 0);

    assert_eq!(service.hit().await.unwrap(), 1);
    assert_eq!(service.hit().await.unwrap(), 2);
    assert_eq!(service.hit().await.unwrap(), 3);

    assert_eq!(service.reset().await.unwrap(), 0);
    assert_eq!(service.current().await.unwrap(), 0);

    assert_eq!(service.hit().await.unwrap(), 1);
}

#[tokio::test]
async fn test_current_does_not_mutate() {
    let service = service();
    service.hit().await.unwrap();

    assert_eq!(service.current().await.unwrap(), 1);
    assert_eq!(service.current().await.unwrap(), 1);
}
