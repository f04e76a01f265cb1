//! HTTP API for the Pethub demo services
//!
//! Exposes the pet catalog and hit counter over REST. Handlers do DTO
//! mapping only; all business logic lives in `pethub-application`.

// HTTP server with REST endpoints (DTO mapping only)
pub mod http;

// API response constants (status strings)
pub mod constants;

// Shared state
pub mod state;

pub use http::{create_router, ErrorResponse, HttpError, HttpServer};
pub use state::ApiState;
