//! Hit counter service
//!
//! The counter's state machine is trivial: one value, two transitions
//! (increment, reset), no terminal state.

use crate::ports::CounterStoreRef;
use pethub_core::Result;
use tracing::debug;

/// Service for hit counter operations
pub struct CounterService {
    store: CounterStoreRef,
}

impl CounterService {
    /// Create a new counter service
    pub fn new(store: CounterStoreRef) -> Self {
        Self { store }
    }

    /// Record a hit and return the new count
    pub async fn hit(&self) -> Result<u64> {
        let hits = self.store.hit().await?;
        debug!(hits, "Counter hit");
        Ok(hits)
    }

    /// Reset the counter to zero and return zero
    pub async fn reset(&self) -> Result<u64> {
        let hits = self.store.reset().await?;
        debug!("Counter reset");
        Ok(hits)
    }

    /// Read the current count without mutating it
    pub async fn current(&self) -> Result<u64> {
        self.store.current().await
    }
}

impl std::fmt::Debug for CounterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterService")
            .field("store", &"<CounterStoreRef>")
            .finish()
    }
}

// Unit tests for this service live in `tests/counter_service.rs` as
// integration tests: they depend on the `pethub-storage` adapter, which in
// turn depends on this crate, so running them inline would create a
// dev-dependency cycle. See that file for details.
