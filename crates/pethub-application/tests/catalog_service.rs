//! Integration tests for `CatalogService`.
//!
//! Relocated from an inline `#[cfg(test)]` module: the service is tested
//! against the real `pethub-storage` adapter, which depends on
//! `pethub-application`. Running these as integration tests (linking the
//! normal library) avoids the dev-dependency cycle that otherwise compiles
//! two incompatible copies of `pethub-application`.

use pethub_application::{CatalogEvent, CatalogService};
use pethub_core::{Error, NewPet, PetId, PetUpdate};
use pethub_storage::MemoryCatalogStore;
use pethub_testing::fixtures;
use std::sync::Arc;
use tokio::sync::broadcast;

fn service() -> CatalogService {
    let (event_tx, _) = broadcast::channel(16);
    CatalogService::new(Arc::new(MemoryCatalogStore::new()), event_tx)
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let service = service();

    let fido = service.create(fixtures::fido()).await.unwrap();
    let whiskers = service.create(fixtures::whiskers()).await.unwrap();

    assert_eq!(fido.id, PetId(1));
    assert_eq!(whiskers.id, PetId(2));
}

#[tokio::test]
async fn test_create_rejects_missing_name() {
    let service = service();

    let result = service
        .create(NewPet {
            category: "Dog".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(result, Err(Error::MissingField("name")));
}

#[tokio::test]
async fn test_list_filter_is_case_insensitive() {
    let service = service();
    service.create(fixtures::fido()).await.unwrap();
    service.create(fixtures::whiskers()).await.unwrap();

    let dogs = service.list(Some("dog")).await.unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].name, "Fido");

    // Filtering is non-destructive
    assert_eq!(service.list(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_no_match_is_empty_not_error() {
    let service = service();
    service.create(fixtures::fido()).await.unwrap();

    let birds = service.list(Some("bird")).await.unwrap();
    assert!(birds.is_empty());
}

#[tokio::test]
async fn test_update_merges_supplied_fields_only() {
    let service = service();
    let pet = service.create(fixtures::fido()).await.unwrap();

    let updated = service
        .update(
            pet.id,
            PetUpdate {
                available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated.available);
    assert_eq!(updated.name, pet.name);
    assert_eq!(updated.category, pet.category);
    assert_eq!(updated.birthday, pet.birthday);
}

#[tokio::test]
async fn test_update_missing_pet_is_not_found() {
    let service = service();

    let result = service.update(PetId(99), PetUpdate::default()).await;
    assert_eq!(result, Err(Error::PetNotFound(99)));
}

#[tokio::test]
async fn test_update_rejects_blank_name() {
    let service = service();
    let pet = service.create(fixtures::fido()).await.unwrap();

    let result = service
        .update(
            pet.id,
            PetUpdate {
                name: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::InvalidField { .. })));
}

#[tokio::test]
async fn test_delete_then_update_and_delete_fail() {
    let service = service();
    let pet = service.create(fixtures::fido()).await.unwrap();

    service.delete(pet.id).await.unwrap();

    let update = service.update(pet.id, PetUpdate::default()).await;
    assert_eq!(update, Err(Error::PetNotFound(pet.id.0)));

    let delete = service.delete(pet.id).await;
    assert_eq!(delete, Err(Error::PetNotFound(pet.id.0)));
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let service = service();

    let first = service.create(fixtures::fido()).await.unwrap();
    service.delete(first.id).await.unwrap();

    let second = service.create(fixtures::whiskers()).await.unwrap();
    assert_eq!(second.id, PetId(2));
}

#[tokio::test]
async fn test_reset_restarts_id_sequence() {
    let service = service();
    service.create(fixtures::fido()).await.unwrap();
    service.create(fixtures::whiskers()).await.unwrap();

    service.reset().await.unwrap();
    assert!(service.list(None).await.unwrap().is_empty());

    let pet = service.create(fixtures::fido()).await.unwrap();
    assert_eq!(pet.id, PetId(1));
}

#[tokio::test]
async fn test_reset_is_idempotent() {
    let service = service();
    service.reset().await.unwrap();
    service.reset().await.unwrap();
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_events_published_for_lifecycle() {
    let service = service();
    let mut rx = service.subscribe();

    let pet = service.create(fixtures::fido()).await.unwrap();
    service.delete(pet.id).await.unwrap();
    service.reset().await.unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        CatalogEvent::Created { pet: pet.clone() }
    );
    assert_eq!(rx.try_recv().unwrap(), CatalogEvent::Deleted { id: pet.id });
    assert_eq!(rx.try_recv().unwrap(), CatalogEvent::Reset);
}

/// The full scenario from the service contract: create two pets, filter,
/// delete, observe NotFound, reset, and watch the sequence restart.
#[tokio::test]
async fn test_catalog_scenario() {
    let service = service();

    let fido = service.create(fixtures::fido()).await.unwrap();
    assert_eq!(fido.id, PetId(1));

    let whiskers = service.create(fixtures::whiskers()).await.unwrap();
    assert_eq!(whiskers.id, PetId(2));

    let dogs = service.list(Some("dog")).await.unwrap();
    assert_eq!(dogs, vec![fido.clone()]);

    service.delete(fido.id).await.unwrap();
    assert_eq!(
        service.update(fido.id, PetUpdate::default()).await,
        Err(Error::PetNotFound(1))
    );

    service.reset().await.unwrap();
    assert!(service.list(None).await.unwrap().is_empty());
    assert_eq!(service.create(fixtures::fido()).await.unwrap().id, PetId(1));
}
