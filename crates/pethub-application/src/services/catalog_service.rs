//! Pet catalog service
//!
//! All catalog business logic lives here: validation, NotFound semantics,
//! and event publication. The repository underneath stays mechanical.

use crate::events::CatalogEvent;
use crate::ports::CatalogRepositoryRef;
use pethub_core::{Error, NewPet, Pet, PetId, PetUpdate, Result};
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Service for pet catalog operations
pub struct CatalogService {
    repository: CatalogRepositoryRef,
    event_tx: broadcast::Sender<CatalogEvent>,
}

impl CatalogService {
    /// Create a new catalog service.
    ///
    /// `event_tx` is shared with the [`AppContext`](crate::AppContext) so
    /// all subscribers see events regardless of where they subscribed.
    pub fn new(repository: CatalogRepositoryRef, event_tx: broadcast::Sender<CatalogEvent>) -> Self {
        Self {
            repository,
            event_tx,
        }
    }

    /// Subscribe to catalog change events
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.event_tx.subscribe()
    }

    fn publish(&self, event: CatalogEvent) {
        // A send error only means there are no subscribers right now
        let _ = self.event_tx.send(event);
    }

    /// Create a pet.
    ///
    /// Presence checks on `name` and `category`, then the store assigns the
    /// next identifier. Returns the full record including the identifier.
    pub async fn create(&self, new_pet: NewPet) -> Result<Pet> {
        new_pet.validate()?;

        let pet = self.repository.insert(new_pet).await?;
        info!(id = %pet.id, name = %pet.name, "Pet created");

        self.publish(CatalogEvent::Created { pet: pet.clone() });
        Ok(pet)
    }

    /// List pets, optionally filtered by category (case-insensitive).
    ///
    /// An empty result is not an error. Filtering is non-destructive.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Pet>> {
        match category {
            Some(category) => self.repository.find_by_category(category).await,
            None => self.repository.find_all().await,
        }
    }

    /// Get a single pet by id.
    ///
    /// Fails with [`Error::PetNotFound`] when the id is absent.
    pub async fn get(&self, id: PetId) -> Result<Pet> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::pet_not_found(id))
    }

    /// Merge the supplied fields into an existing pet.
    ///
    /// Fields left unset keep their prior values; the identifier can never
    /// be changed. Fails with [`Error::PetNotFound`] when the id is absent.
    pub async fn update(&self, id: PetId, update: PetUpdate) -> Result<Pet> {
        update.validate()?;

        let pet = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| Error::pet_not_found(id))?;
        info!(id = %pet.id, "Pet updated");

        self.publish(CatalogEvent::Updated { pet: pet.clone() });
        Ok(pet)
    }

    /// Delete a pet.
    ///
    /// Fails with [`Error::PetNotFound`] when the id is absent; a second
    /// delete of the same id therefore also fails.
    pub async fn delete(&self, id: PetId) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(Error::pet_not_found(id));
        }
        info!(%id, "Pet deleted");

        self.publish(CatalogEvent::Deleted { id });
        Ok(())
    }

    /// Number of pets currently stored
    pub async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }

    /// Clear the catalog and restart the identifier sequence.
    ///
    /// Idempotent: resetting an empty catalog succeeds.
    pub async fn reset(&self) -> Result<()> {
        self.repository.reset().await?;
        debug!("Catalog reset");

        self.publish(CatalogEvent::Reset);
        Ok(())
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("repository", &"<CatalogRepositoryRef>")
            .finish()
    }
}


// Unit tests for this service live in `tests/catalog_service.rs` as
// integration tests: they depend on the `pethub-storage` adapter, which in
// turn depends on this crate, so running them inline would create a
// dev-dependency cycle. See that file for details.
