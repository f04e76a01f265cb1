//! Configuration structures

use crate::constants::{
    DEFAULT_EVENT_BUFFER_CAPACITY, DEFAULT_LOG_LEVEL, DEFAULT_LOG_SHOW_TARGET,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Root Config
// ============================================================================

/// Root configuration for the Pethub services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// ============================================================================
// Server Config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_server_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl ServerConfig {
    /// The `host:port` string the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ============================================================================
// API Config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Capacity of the catalog event broadcast channel (buffer size)
    #[serde(default = "default_event_buffer_capacity")]
    pub event_buffer_capacity: usize,
}

fn default_event_buffer_capacity() -> usize {
    DEFAULT_EVENT_BUFFER_CAPACITY
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            event_buffer_capacity: DEFAULT_EVENT_BUFFER_CAPACITY,
        }
    }
}

// ============================================================================
// Logging Config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set (trace/debug/info/warn/error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Include the module target in log lines
    #[serde(default = "default_show_target")]
    pub show_target: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_show_target() -> bool {
    DEFAULT_LOG_SHOW_TARGET
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: DEFAULT_LOG_LEVEL.to_string(),
            show_target: DEFAULT_LOG_SHOW_TARGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, DEFAULT_SERVER_HOST);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.api.event_buffer_capacity, DEFAULT_EVENT_BUFFER_CAPACITY);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:9000");
    }
}
