//! Shared application context (protocol-agnostic)
//!
//! Contains the services used by all presentation layers (API, CLI).
//! Both depend on this abstraction, not on each other.
//!
//! AppContext does NOT store a Config reference: config values are read at
//! construction time and used to size the event channel. Once created, the
//! context's composition is immutable.

use crate::events::CatalogEvent;
use crate::ports::{CatalogRepositoryRef, CounterStoreRef};
use crate::services::{CatalogService, CounterService};
use pethub_config::ApiConfig;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Shared application context containing the demo services
///
/// The counter and catalog are independent entities and never share a lock;
/// the context merely composes them for the presentation layers.
#[derive(Clone)]
pub struct AppContext {
    /// Pet catalog service (protocol-agnostic)
    pub catalog_service: Arc<CatalogService>,

    /// Hit counter service (protocol-agnostic)
    pub counter_service: Arc<CounterService>,
}

impl AppContext {
    /// Create a new application context
    ///
    /// # Arguments
    /// * `catalog` - Catalog repository implementation (trait object)
    /// * `counter` - Counter store implementation (trait object)
    /// * `api_config` - API configuration (event channel capacity)
    pub fn new(
        catalog: CatalogRepositoryRef,
        counter: CounterStoreRef,
        api_config: &ApiConfig,
    ) -> Self {
        // Broadcast channel for real-time catalog events; the service keeps
        // the sender so subscribers anywhere see the same stream
        let (event_tx, _) = broadcast::channel::<CatalogEvent>(api_config.event_buffer_capacity);

        Self {
            catalog_service: Arc::new(CatalogService::new(catalog, event_tx)),
            counter_service: Arc::new(CounterService::new(counter)),
        }
    }

    /// Create a new application context with default config
    pub fn with_defaults(catalog: CatalogRepositoryRef, counter: CounterStoreRef) -> Self {
        Self::new(catalog, counter, &ApiConfig::default())
    }

    /// Subscribe to the catalog event broadcast channel
    pub fn subscribe_catalog_events(&self) -> broadcast::Receiver<CatalogEvent> {
        self.catalog_service.subscribe()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("catalog_service", &self.catalog_service)
            .field("counter_service", &self.counter_service)
            .finish()
    }
}


// Tests for this composition live in `tests/context.rs` as integration tests:
// they depend on the `pethub-storage` adapters, which depend on this crate, so
// running them inline would create a dev-dependency cycle. See that file.
