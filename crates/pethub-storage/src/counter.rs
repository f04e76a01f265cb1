//! In-memory hit counter store

use async_trait::async_trait;
use pethub_application::CounterStore;
use pethub_core::Result;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory hit counter.
///
/// Every operation is a single atomic instruction, so no lock is needed;
/// concurrent hits can never lose an increment. The count is a `u64`, which
/// keeps the non-negative invariant in the type.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    hits: AtomicU64,
}

impl MemoryCounterStore {
    /// Create a counter initialized to 0
    pub fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn hit(&self) -> Result<u64> {
        Ok(self.hits.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn reset(&self) -> Result<u64> {
        self.hits.store(0, Ordering::SeqCst);
        Ok(0)
    }

    async fn current(&self) -> Result<u64> {
        Ok(self.hits.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_hits_count_up_from_zero() {
        let store = MemoryCounterStore::new();

        assert_eq!(store.current().await.unwrap(), 0);
        assert_eq!(store.hit().await.unwrap(), 1);
        assert_eq!(store.hit().await.unwrap(), 2);
        assert_eq!(store.hit().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_reset_returns_zero() {
        let store = MemoryCounterStore::new();
        store.hit().await.unwrap();
        store.hit().await.unwrap();

        assert_eq!(store.reset().await.unwrap(), 0);
        assert_eq!(store.hit().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_hits_lose_nothing() {
        let store = Arc::new(MemoryCounterStore::new());
        let mut handles = Vec::new();

        for _ in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    store.hit().await.unwrap();
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.current().await.unwrap(), 1000);
    }
}
