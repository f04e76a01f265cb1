//! API response string constants
//!
//! HTTP response status strings that are not related to domain entities.

/// Status strings for API responses
pub mod status {
    /// Operation completed successfully
    pub const OK: &str = "ok";
}

/// Service identifier reported by the health endpoint
pub const SERVICE_NAME: &str = "pethub";
