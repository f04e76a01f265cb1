//! Domain entities

mod pet;

pub use pet::{NewPet, Pet, PetId, PetUpdate};
