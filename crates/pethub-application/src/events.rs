//! Catalog change events for real-time streaming
//!
//! Every state-changing catalog operation publishes one of these on the
//! context's broadcast channel so observers (logging, future streaming
//! surfaces) can follow catalog lifecycle without polling.

use pethub_core::{Pet, PetId};
use serde::Serialize;

/// A catalog lifecycle event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// A pet was created
    Created { pet: Pet },
    /// A pet was updated
    Updated { pet: Pet },
    /// A pet was deleted
    Deleted { id: PetId },
    /// The whole catalog was cleared and the id sequence restarted
    Reset,
}

impl CatalogEvent {
    /// Get the event type string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
            Self::Deleted { .. } => "deleted",
            Self::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_strings() {
        assert_eq!(CatalogEvent::Reset.as_str(), "reset");
        assert_eq!(CatalogEvent::Deleted { id: PetId(1) }.as_str(), "deleted");
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let json = serde_json::to_value(CatalogEvent::Deleted { id: PetId(9) }).unwrap();
        assert_eq!(json["type"], "deleted");
        assert_eq!(json["id"], 9);
    }
}
