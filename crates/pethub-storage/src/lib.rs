//! In-memory store implementations for Pethub
//!
//! The demo services hold all state in process memory and never persist it.
//! This crate provides the infrastructure adapters implementing the
//! application-layer ports:
//!
//! - [`MemoryCatalogStore`] - pet records behind a single `RwLock` that also
//!   guards the identifier allocator
//! - [`MemoryCounterStore`] - an atomic hit counter
//!
//! Replacing the hidden module-level globals of the source demos, each store
//! is an explicitly owned object whose lifetime is controlled by the hosting
//! process: constructed at startup and handed to request handlers by
//! reference.

mod allocator;
mod catalog;
mod counter;

pub use allocator::IdAllocator;
pub use catalog::MemoryCatalogStore;
pub use counter::MemoryCounterStore;
