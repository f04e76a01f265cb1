//! Output port traits for the demo stores
//!
//! Per Clean Architecture, output ports belong in the Application layer.
//! Infrastructure adapters (`pethub-storage`) implement these traits.
//!
//! Repositories are mechanical: they report absence via `Option`/`bool` and
//! leave the NotFound error semantics to the services.

use async_trait::async_trait;
use pethub_core::error::Result;
use pethub_core::{NewPet, Pet, PetId, PetUpdate};
use std::sync::Arc;

/// Repository for pet records
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Assign a fresh identifier and store the record.
    ///
    /// Identifiers are strictly increasing and never reused, even after
    /// deletion; only [`reset`](CatalogRepository::reset) restarts the
    /// sequence.
    async fn insert(&self, pet: NewPet) -> Result<Pet>;

    /// Find a pet by its identifier
    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>>;

    /// Find all pets (unspecified order)
    async fn find_all(&self) -> Result<Vec<Pet>>;

    /// Find pets whose category matches case-insensitively
    async fn find_by_category(&self, category: &str) -> Result<Vec<Pet>>;

    /// Merge the supplied fields into an existing record.
    ///
    /// Returns the updated record, or `None` when the id is absent. The
    /// merge happens atomically under the store's write scope so readers
    /// never observe a partially-applied update.
    async fn update(&self, id: PetId, update: PetUpdate) -> Result<Option<Pet>>;

    /// Remove a record. Returns `true` when a record was removed.
    async fn delete(&self, id: PetId) -> Result<bool>;

    /// Number of records stored
    async fn count(&self) -> Result<u64>;

    /// Clear all records and restart the identifier sequence at 1.
    ///
    /// Clearing and allocator reset are one atomic step so the two can
    /// never drift apart. Idempotent.
    async fn reset(&self) -> Result<()>;
}

pub type CatalogRepositoryRef = Arc<dyn CatalogRepository>;

/// Store for the hit counter
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment and return the new value
    async fn hit(&self) -> Result<u64>;

    /// Set the counter to zero and return zero
    async fn reset(&self) -> Result<u64>;

    /// Read the current value without mutating it
    async fn current(&self) -> Result<u64>;
}

pub type CounterStoreRef = Arc<dyn CounterStore>;
