//! Centralized logging configuration for Pethub
//!
//! This crate provides a unified logging initialization API for Pethub
//! binaries. It wraps `tracing` and `tracing-subscriber` to ensure
//! consistent logging behavior.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pethub_logging::{init, LogConfig, LogOutput};
//!
//! // Simple initialization with defaults
//! init(LogConfig::default());
//!
//! // CLI with debug flag
//! init(LogConfig::cli(true));
//!
//! // Logs to stderr
//! init(LogConfig::new().output(LogOutput::Stderr));
//! ```
//!
//! # Re-exports
//!
//! This crate re-exports commonly used tracing macros for convenience:
//! `trace!`, `debug!`, `info!`, `warn!`, `error!`.

use tracing_subscriber::EnvFilter;

// Re-export tracing macros for standardized imports
pub use tracing::{debug, error, info, trace, warn, Level};

/// Output destination for logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogOutput {
    /// Write logs to stdout (default)
    #[default]
    Stdout,
    /// Write logs to stderr
    Stderr,
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Enable debug-level logging (overrides default_level)
    pub debug: bool,
    /// Default log level when RUST_LOG is not set
    pub default_level: String,
    /// Output destination
    pub output: LogOutput,
    /// Show module target in log output
    pub show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            default_level: "info".to_string(),
            output: LogOutput::Stdout,
            show_target: false,
        }
    }
}

impl LogConfig {
    /// Create a new LogConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable debug-level logging
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Set the default log level (used when RUST_LOG is not set)
    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Set the output destination
    pub fn output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Show or hide module target in log output
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Convenience: Configure for CLI usage
    pub fn cli(debug: bool) -> Self {
        Self::new().debug(debug)
    }

    /// Convenience: Configure for tests
    pub fn test() -> Self {
        Self::new().default_level("debug")
    }

    fn build_filter(&self) -> EnvFilter {
        if self.debug {
            EnvFilter::new("debug")
        } else {
            // RUST_LOG wins over the configured default
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_level.clone()))
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Panics if a global subscriber is already set; use [`try_init`] in tests.
pub fn init(config: LogConfig) {
    try_init(config).expect("failed to set global tracing subscriber");
}

/// Initialize the global tracing subscriber, returning an error if one is
/// already set.
///
/// Safe to call from every test; only the first call wins.
pub fn try_init(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = config.build_filter();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.show_target);

    match config.output {
        LogOutput::Stdout => builder.try_init(),
        LogOutput::Stderr => builder.with_writer(std::io::stderr).try_init(),
    }
}
