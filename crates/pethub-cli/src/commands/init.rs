//! Init command - write a default config file

use anyhow::{Context, Result};
use pethub_config::create_config;
use pethub_logging::{info, LogConfig};
use std::path::Path;

pub fn run(path: &str, debug: bool) -> Result<()> {
    pethub_logging::init(LogConfig::cli(debug));

    let written = create_config(Path::new(path))
        .with_context(|| format!("Failed to create config at {}", path))?;

    info!("Config file ready at {}", written.display());
    println!("{}", written.display());

    Ok(())
}
