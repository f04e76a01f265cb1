//! Test fixtures and sample data factories
//!
//! Provides convenient functions to create sample domain objects for testing.

use pethub_core::NewPet;

/// The canonical dog from the catalog scenario
pub fn fido() -> NewPet {
    NewPet {
        name: "Fido".to_string(),
        category: "Dog".to_string(),
        available: true,
        gender: "male".to_string(),
        birthday: "2020-01-15".to_string(),
    }
}

/// The canonical cat from the catalog scenario
pub fn whiskers() -> NewPet {
    NewPet {
        name: "Whiskers".to_string(),
        category: "Cat".to_string(),
        available: true,
        gender: "female".to_string(),
        birthday: "2021-06-02".to_string(),
    }
}

/// Create a pet with the given name and category
///
/// Uses sensible defaults for all other fields.
pub fn sample_pet(name: &str, category: &str) -> NewPet {
    NewPet {
        name: name.to_string(),
        category: category.to_string(),
        available: true,
        gender: String::new(),
        birthday: String::new(),
    }
}
