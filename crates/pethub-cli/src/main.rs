//! Pethub command line interface
//!
//! Thin orchestrator: argument parsing lives here, the heavy lifting
//! (config loading, logging setup, server wiring) is in the command
//! modules.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pethub_config::DEFAULT_CONFIG_FILENAME;

#[derive(Parser)]
#[command(
    name = "pethub",
    version,
    about = "In-memory pet catalog and hit counter demo services"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Path to the config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
        config: String,

        /// Override the bind host from the config
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port from the config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a default config file
    Init {
        /// Where to write the config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => {
            commands::serve::run(&config, host, port, cli.debug).await
        }
        Commands::Init { path } => commands::init::run(&path, cli.debug),
    }
}
