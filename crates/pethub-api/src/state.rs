//! Shared application state for the HTTP API

use pethub_application::{AppContext, CatalogEvent};
use std::time::Instant;
use tokio::sync::broadcast;

/// Shared state across all API endpoints
///
/// Wraps the shared [`AppContext`] and adds API-specific fields. Constructed
/// once at startup and handed to handlers behind an `Arc`.
pub struct ApiState {
    /// Shared application context (services)
    pub context: AppContext,

    /// Server start time for uptime calculation (monotonic)
    pub start_time: Instant,
}

impl ApiState {
    /// Create new API state around an application context
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Subscribe to catalog change events
    pub fn subscribe_catalog_events(&self) -> broadcast::Receiver<CatalogEvent> {
        self.context.subscribe_catalog_events()
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("context", &self.context)
            .field("start_time", &self.start_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethub_storage::{MemoryCatalogStore, MemoryCounterStore};
    use pethub_testing::fixtures;
    use std::sync::Arc;

    fn test_state() -> ApiState {
        ApiState::new(AppContext::with_defaults(
            Arc::new(MemoryCatalogStore::new()),
            Arc::new(MemoryCounterStore::new()),
        ))
    }

    #[tokio::test]
    async fn test_uptime_starts_at_zero() {
        let state = test_state();
        assert_eq!(state.uptime_seconds(), 0);
    }

    #[tokio::test]
    async fn test_catalog_events_reach_state_subscribers() {
        let state = test_state();
        let mut rx = state.subscribe_catalog_events();

        let pet = state
            .context
            .catalog_service
            .create(fixtures::fido())
            .await
            .unwrap();

        let event = rx.try_recv().unwrap();
        assert_eq!(event, CatalogEvent::Created { pet });
    }
}
