//! Protocol-agnostic business logic layer (Use Cases)
//!
//! This layer contains all business logic and is independent of transport
//! protocols. Controllers only handle DTO mapping and delegate to these
//! services.

pub mod catalog_service;
pub mod counter_service;

pub use catalog_service::CatalogService;
pub use counter_service::CounterService;
