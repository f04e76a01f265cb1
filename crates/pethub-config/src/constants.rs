//! Default values for all configuration settings
//!
//! Every `#[serde(default = "...")]` function and `Default` impl in this
//! crate reads from here so defaults have a single source of truth.

/// Default config file name, resolved relative to the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "pethub.toml";

/// Default bind host for the HTTP server
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default bind port for the HTTP server
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Capacity of the catalog event broadcast channel
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = 1024;

/// Default log level when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Whether log lines include the module target by default
pub const DEFAULT_LOG_SHOW_TARGET: bool = false;
