//! Configuration file loading and creation
//!
//! Provides functions to load configuration from TOML files:
//!
//! - [`load_config`] - Strict loader, errors if file missing (no side effects)
//! - [`create_config`] - Creates the default config file without loading
//!
//! # Usage
//!
//! ```rust,ignore
//! use pethub_config::{create_config, load_config};
//! use std::path::Path;
//!
//! // Strict loading (for services)
//! let config = load_config(Path::new("pethub.toml"))?;
//!
//! // Just create the file without loading (for `pethub init`)
//! let path = create_config(Path::new("pethub.toml"))?;
//! ```

use crate::Config;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration template written by `pethub init`
pub const DEFAULT_CONFIG: &str = r#"# Pethub configuration

[server]
host = "127.0.0.1"
port = 8080

[api]
# Capacity of the catalog event broadcast channel
event_buffer_capacity = 1024

[logging]
# trace | debug | info | warn | error (RUST_LOG overrides this)
level = "info"
show_target = false
"#;

/// Errors that can occur during config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}. Run 'pethub init' to create a default config.")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load configuration from a TOML file (strict - no side effects)
///
/// This is the preferred loader for services. It:
/// - Does NOT create files if missing (returns `ConfigError::NotFound`)
/// - Only reads and parses the config file
///
/// Use [`create_config`] (via `pethub init`) to create a default config.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "Loading config file");
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parse configuration from a TOML string
///
/// Useful for tests and for loading embedded templates.
pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Create the default configuration file at the specified path
///
/// Creates the config file if it doesn't exist; does nothing if the file
/// already exists. Use this for `pethub init`.
pub fn create_config(path: &Path) -> Result<PathBuf, std::io::Error> {
    if path.exists() {
        debug!(path = %path.display(), "Config file already exists");
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!(path = %path.display(), "Writing default config file");
    std::fs::write(path, DEFAULT_CONFIG)?;

    Ok(path.to_path_buf())
}
