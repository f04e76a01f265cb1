//! Pet catalog CRUD handlers
//!
//! Endpoints for creating, listing, updating, and deleting pets, plus the
//! bulk reset used by test harnesses.

use crate::http::error::HttpError;
use crate::state::ApiState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use pethub_core::{NewPet, Pet, PetId, PetUpdate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query parameters for listing pets
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPetsQuery {
    /// Optional case-insensitive category filter
    pub category: Option<String>,
}

/// Request DTO for creating a pet
///
/// The identifier is assigned by the store and cannot be supplied here.
/// Has both Serialize and Deserialize for use in tests.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: String,
    pub category: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birthday: String,
}

fn default_available() -> bool {
    true
}

impl From<CreatePetRequest> for NewPet {
    fn from(req: CreatePetRequest) -> Self {
        NewPet {
            name: req.name,
            category: req.category,
            available: req.available,
            gender: req.gender,
            birthday: req.birthday,
        }
    }
}

/// Request DTO for partially updating a pet
///
/// Fields left out keep their prior values. Unknown keys (including `id`)
/// are rejected rather than silently merged.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePetRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
}

impl From<UpdatePetRequest> for PetUpdate {
    fn from(req: UpdatePetRequest) -> Self {
        PetUpdate {
            name: req.name,
            category: req.category,
            available: req.available,
            gender: req.gender,
            birthday: req.birthday,
        }
    }
}

/// List all pets, optionally filtered by category.
///
/// # Query Parameters
/// - `category`: Optional case-insensitive category filter
///
/// # Response
/// Returns an array of pet records; empty when nothing matches.
pub async fn list_pets(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ListPetsQuery>,
) -> Result<Json<Vec<Pet>>, HttpError> {
    info!("REST: list_pets (category={:?})", params.category);

    let pets = state
        .context
        .catalog_service
        .list(params.category.as_deref())
        .await?;

    Ok(Json(pets))
}

/// Get a single pet by its numeric ID.
///
/// # Errors
/// - 404 Not Found: Pet with given ID does not exist
pub async fn get_pet(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> Result<Json<Pet>, HttpError> {
    info!("REST: get_pet (id={})", id);

    let pet = state.context.catalog_service.get(PetId(id)).await?;
    Ok(Json(pet))
}

/// Create a new pet.
///
/// # Request Body
/// - `name`: Pet name (required)
/// - `category`: Category used for filtering (required)
/// - `available`: Availability flag - default: true
/// - `gender`, `birthday`: Optional descriptive fields
///
/// # Response
/// Returns 201 Created with the full record including the assigned id.
///
/// # Errors
/// - 400 Bad Request: Required field missing
pub async fn create_pet(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<Pet>), HttpError> {
    info!(
        "REST: create_pet (name={}, category={})",
        payload.name, payload.category
    );

    let pet = state.context.catalog_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(pet)))
}

/// Partially update a pet.
///
/// Merges the supplied fields into the existing record; fields left out
/// keep their prior values. The identifier can never be changed.
///
/// # Errors
/// - 404 Not Found: Pet with given ID does not exist
/// - 400 Bad Request: A supplied field is invalid (e.g. blank name)
pub async fn update_pet(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdatePetRequest>,
) -> Result<Json<Pet>, HttpError> {
    info!("REST: update_pet (id={})", id);

    let pet = state
        .context
        .catalog_service
        .update(PetId(id), payload.into())
        .await?;

    Ok(Json(pet))
}

/// Delete a pet by ID.
///
/// # Response
/// Returns 204 No Content on success.
///
/// # Errors
/// - 404 Not Found: Pet with given ID does not exist
pub async fn delete_pet(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, HttpError> {
    info!("REST: delete_pet (id={})", id);

    state.context.catalog_service.delete(PetId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Clear the catalog and restart the identifier sequence.
///
/// Used by test harnesses between scenarios. Idempotent.
///
/// # Response
/// Returns 204 No Content.
pub async fn reset_catalog(State(state): State<Arc<ApiState>>) -> Result<StatusCode, HttpError> {
    info!("REST: reset_catalog");

    state.context.catalog_service.reset().await?;

    Ok(StatusCode::NO_CONTENT)
}
