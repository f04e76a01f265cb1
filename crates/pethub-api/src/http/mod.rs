//! HTTP API server module
//!
//! REST endpoints built on axum. All endpoints share the same ApiState:
//! - Handlers do DTO mapping ONLY
//! - All business logic is delegated to application services
//!
//! # Route Structure
//!
//! ```text
//! /health          - Health check
//! /pets            - GET (list/filter), POST (create)
//! /pets/{id}       - GET, PUT (partial update), DELETE
//! /pets/reset      - POST (clear catalog, restart id sequence)
//! /hit             - POST (increment counter)
//! /hits            - GET (read counter)
//! /reset           - POST (reset counter)
//! ```

pub mod error;
pub mod handlers;
pub mod paths;
pub mod routes;
pub mod server;

pub use error::{ErrorResponse, HttpError};
pub use routes::create_router;
pub use server::HttpServer;
