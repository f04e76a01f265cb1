//! HTTP REST handlers
//!
//! Following Clean Architecture:
//! - Parse/validate incoming DTOs (JSON)
//! - Convert DTOs to domain types
//! - Call application services
//! - Convert results to JSON responses
//!
//! NO business logic in handlers!

mod counter;
mod health;
mod pets;

pub use counter::{current_hits, hit_counter, reset_counter, HitsResponse};
pub use health::{health_check, HealthResponse};
pub use pets::{
    create_pet, delete_pet, get_pet, list_pets, reset_catalog, update_pet, CreatePetRequest,
    ListPetsQuery, UpdatePetRequest,
};
