//! Pet identifier allocation

use pethub_core::PetId;

/// Produces unique, strictly increasing pet identifiers starting at 1.
///
/// Identifiers are never reused, even after the record they were assigned to
/// is deleted. [`reset`](IdAllocator::reset) restores the initial state so
/// the next call returns 1 again; the catalog store keeps the allocator
/// inside its own lock so a reset can never be observed apart from the
/// matching catalog clear.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first identifier is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the next identifier and advance the sequence
    pub fn next_id(&mut self) -> PetId {
        let id = PetId(self.next);
        self.next += 1;
        id
    }

    /// Restore the initial state; the next call returns 1 again
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
