//! In-memory pet catalog store

use crate::allocator::IdAllocator;
use async_trait::async_trait;
use pethub_application::CatalogRepository;
use pethub_core::{Error, NewPet, Pet, PetId, PetUpdate, Result};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Map and allocator live under the same lock so a catalog clear and the
/// allocator reset are one atomic step and can never drift apart.
#[derive(Debug, Default)]
struct CatalogInner {
    allocator: IdAllocator,
    pets: HashMap<PetId, Pet>,
}

/// In-memory pet catalog.
///
/// All mutation is serialized behind a single `RwLock`; reads take the read
/// lock so they never observe a partially-applied update. The lock is never
/// held across an await point.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    inner: RwLock<CatalogInner>,
}

impl MemoryCatalogStore {
    /// Create a new empty catalog store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogInner {
                allocator: IdAllocator::new(),
                pets: HashMap::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogInner>> {
        self.inner
            .read()
            .map_err(|_| Error::Storage("catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogInner>> {
        self.inner
            .write()
            .map_err(|_| Error::Storage("catalog lock poisoned".to_string()))
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogStore {
    async fn insert(&self, pet: NewPet) -> Result<Pet> {
        let mut inner = self.write()?;
        let id = inner.allocator.next_id();
        let pet = pet.into_pet(id);
        inner.pets.insert(id, pet.clone());
        Ok(pet)
    }

    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>> {
        Ok(self.read()?.pets.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Pet>> {
        Ok(self.read()?.pets.values().cloned().collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Pet>> {
        Ok(self
            .read()?
            .pets
            .values()
            .filter(|pet| pet.category_matches(category))
            .cloned()
            .collect())
    }

    async fn update(&self, id: PetId, update: PetUpdate) -> Result<Option<Pet>> {
        let mut inner = self.write()?;
        Ok(inner.pets.get_mut(&id).map(|pet| {
            update.apply(pet);
            pet.clone()
        }))
    }

    async fn delete(&self, id: PetId) -> Result<bool> {
        Ok(self.write()?.pets.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.read()?.pets.len() as u64)
    }

    async fn reset(&self) -> Result<()> {
        let mut inner = self.write()?;
        inner.pets.clear();
        inner.allocator.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethub_testing::fixtures;

    #[tokio::test]
    async fn test_insert_assigns_ids_from_one() {
        let store = MemoryCatalogStore::new();

        let fido = store.insert(fixtures::fido()).await.unwrap();
        let whiskers = store.insert(fixtures::whiskers()).await.unwrap();

        assert_eq!(fido.id, PetId(1));
        assert_eq!(whiskers.id, PetId(2));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ids_never_reused_across_deletes() {
        let store = MemoryCatalogStore::new();

        let mut seen = Vec::new();
        for round in 0..5 {
            let pet = store
                .insert(fixtures::sample_pet(&format!("pet-{round}"), "Dog"))
                .await
                .unwrap();
            seen.push(pet.id);
            store.delete(pet.id).await.unwrap();
        }

        let mut sorted = seen.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, seen, "ids must be strictly increasing");
        assert_eq!(seen.len(), 5);
    }

    #[tokio::test]
    async fn test_find_by_category_is_case_insensitive() {
        let store = MemoryCatalogStore::new();
        store.insert(fixtures::fido()).await.unwrap();
        store.insert(fixtures::whiskers()).await.unwrap();

        let dogs = store.find_by_category("DOG").await.unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].name, "Fido");

        let none = store.find_by_category("hamster").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_under_lock() {
        let store = MemoryCatalogStore::new();
        let pet = store.insert(fixtures::fido()).await.unwrap();

        let updated = store
            .update(
                pet.id,
                PetUpdate {
                    name: Some("Rex".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Rex");
        assert_eq!(updated.category, "Dog");
        assert_eq!(updated.id, pet.id);
    }

    #[tokio::test]
    async fn test_update_absent_returns_none() {
        let store = MemoryCatalogStore::new();
        let result = store.update(PetId(404), PetUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let store = MemoryCatalogStore::new();
        let pet = store.insert(fixtures::fido()).await.unwrap();

        assert!(store.delete(pet.id).await.unwrap());
        assert!(!store.delete(pet.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_clears_records_and_allocator_together() {
        let store = MemoryCatalogStore::new();
        store.insert(fixtures::fido()).await.unwrap();
        store.insert(fixtures::whiskers()).await.unwrap();

        store.reset().await.unwrap();

        assert_eq!(store.count().await.unwrap(), 0);
        let pet = store.insert(fixtures::fido()).await.unwrap();
        assert_eq!(pet.id, PetId(1));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let store = Arc::new(MemoryCatalogStore::new());
        let mut handles = Vec::new();

        for task in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for round in 0..25 {
                    let pet = store
                        .insert(fixtures::sample_pet(&format!("{task}-{round}"), "Dog"))
                        .await
                        .unwrap();
                    ids.push(pet.id);
                }
                ids
            }));
        }

        let mut all_ids = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(all_ids.insert(id), "duplicate id {id}");
            }
        }

        assert_eq!(all_ids.len(), 200);
        assert_eq!(store.count().await.unwrap(), 200);
    }
}
