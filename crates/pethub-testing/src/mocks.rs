//! Mock store implementations for testing
//!
//! The real stores are already in-memory, so most tests use them directly.
//! These mocks cover the paths the real stores cannot produce on demand:
//! infrastructure failures.

use async_trait::async_trait;
use pethub_application::{CatalogRepository, CounterStore};
use pethub_core::{Error, NewPet, Pet, PetId, PetUpdate, Result};

fn storage_error() -> Error {
    Error::Storage("injected failure".to_string())
}

/// A catalog repository whose every operation fails with a storage error
#[derive(Debug, Default)]
pub struct FailingCatalogStore;

impl FailingCatalogStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogRepository for FailingCatalogStore {
    async fn insert(&self, _pet: NewPet) -> Result<Pet> {
        Err(storage_error())
    }

    async fn find_by_id(&self, _id: PetId) -> Result<Option<Pet>> {
        Err(storage_error())
    }

    async fn find_all(&self) -> Result<Vec<Pet>> {
        Err(storage_error())
    }

    async fn find_by_category(&self, _category: &str) -> Result<Vec<Pet>> {
        Err(storage_error())
    }

    async fn update(&self, _id: PetId, _update: PetUpdate) -> Result<Option<Pet>> {
        Err(storage_error())
    }

    async fn delete(&self, _id: PetId) -> Result<bool> {
        Err(storage_error())
    }

    async fn count(&self) -> Result<u64> {
        Err(storage_error())
    }

    async fn reset(&self) -> Result<()> {
        Err(storage_error())
    }
}

/// A counter store whose every operation fails with a storage error
#[derive(Debug, Default)]
pub struct FailingCounterStore;

impl FailingCounterStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CounterStore for FailingCounterStore {
    async fn hit(&self) -> Result<u64> {
        Err(storage_error())
    }

    async fn reset(&self) -> Result<u64> {
        Err(storage_error())
    }

    async fn current(&self) -> Result<u64> {
        Err(storage_error())
    }
}
