//! # Pethub Application Layer
//!
//! This crate contains the use cases (business logic) of the Pethub demo
//! services, following Clean Architecture principles.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Presentation Layer                 │  <- pethub-api, pethub-cli
//! │  (REST handlers, CLI commands)      │
//! ├─────────────────────────────────────┤
//! │  Application Layer                  │  <- THIS CRATE
//! │  (Use Cases / Services)             │
//! ├─────────────────────────────────────┤
//! │  Infrastructure Layer               │  <- pethub-storage
//! │  (In-memory stores)                 │
//! ├─────────────────────────────────────┤
//! │  Domain Layer                       │  <- pethub-core
//! │  (Entities, Errors)                 │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Services
//!
//! - [`CatalogService`] - All pet catalog operations (create, list, get,
//!   update, delete, reset)
//! - [`CounterService`] - Hit counter operations (hit, reset, current)
//!
//! ## Principles
//!
//! 1. **Protocol-Agnostic**: Services have NO knowledge of HTTP or CLI
//! 2. **Domain Types Only**: Services accept and return `pethub-core` types
//! 3. **Testable**: Services can be tested without any transport protocol
//!
//! Controllers should NEVER contain business logic - only DTO mapping!

// Catalog change events
pub mod events;

// Output ports (repository traits implemented by pethub-storage)
pub mod ports;

// Protocol-agnostic business logic (Use Cases)
pub mod services;

// Shared application context
pub mod context;

pub use context::AppContext;
pub use events::CatalogEvent;
pub use ports::{CatalogRepository, CatalogRepositoryRef, CounterStore, CounterStoreRef};
pub use services::{CatalogService, CounterService};

// The services add no failure modes of their own, so the application layer
// reuses the domain error type directly.
pub use pethub_core::{Error, Result};
