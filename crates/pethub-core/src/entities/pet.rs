//! Core pet entity and related types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a pet (newtype for type safety)
///
/// Identifiers are assigned by the catalog store, never by clients.
/// They are strictly increasing for the lifetime of a store and are not
/// reused after deletion; only a full catalog reset restarts the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PetId(pub u64);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Core pet entity
///
/// The catalog store owns all records; callers receive clones on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Category used for case-insensitive filtering (e.g. "Dog", "Cat")
    pub category: String,
    pub available: bool,
    pub gender: String,
    /// Date-like text, stored verbatim
    pub birthday: String,
}

impl Pet {
    /// Case-insensitive category match used by list filtering
    pub fn category_matches(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// Fields for creating a pet (no identifier - the store assigns one)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
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

impl NewPet {
    /// Presence checks for required fields.
    ///
    /// Only `name` and `category` are required; the demo services accept
    /// everything else as-is.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::MissingField("category"));
        }
        Ok(())
    }

    /// Materialize a full record with the given identifier
    pub fn into_pet(self, id: PetId) -> Pet {
        Pet {
            id,
            name: self.name,
            category: self.category,
            available: self.available,
            gender: self.gender,
            birthday: self.birthday,
        }
    }
}

/// Partial update applied field-by-field over an existing record.
///
/// `id` is deliberately not representable here: the identifier is owned by
/// the store and can never be overwritten through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
}

impl PetUpdate {
    /// Returns true when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.available.is_none()
            && self.gender.is_none()
            && self.birthday.is_none()
    }

    /// Reject updates that would blank out a required field.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::InvalidField {
                    field: "name",
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(Error::InvalidField {
                    field: "category",
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge the supplied fields into `pet`, leaving the rest unchanged
    pub fn apply(self, pet: &mut Pet) {
        if let Some(name) = self.name {
            pet.name = name;
        }
        if let Some(category) = self.category {
            pet.category = category;
        }
        if let Some(available) = self.available {
            pet.available = available;
        }
        if let Some(gender) = self.gender {
            pet.gender = gender;
        }
        if let Some(birthday) = self.birthday {
            pet.birthday = birthday;
        }
    }
}
