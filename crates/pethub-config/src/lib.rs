//! Configuration types and loading for Pethub
//!
//! This crate provides:
//! - Configuration structures for all Pethub components
//! - Config file loading (TOML format)
//!
//! # Architecture
//!
//! Configuration is an infrastructure concern and lives outside the domain
//! layer. This crate has no dependency on `pethub-core`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pethub_config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pethub.toml"))?;
//! println!("Listening on {}:{}", config.server.host, config.server.port);
//! ```

mod loader;
mod types;

// Default constants for all configuration values
pub mod constants;

pub use loader::{create_config, load_config, load_config_from_str, ConfigError, DEFAULT_CONFIG};
pub use types::{ApiConfig, Config, LoggingConfig, ServerConfig};

// Re-export commonly used constants for convenience
pub use constants::{DEFAULT_CONFIG_FILENAME, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
