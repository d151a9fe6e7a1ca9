//! CLI adapter for notetree
//!
//! Thin command-line driver over the corpus reader in `core/`. Useful
//! for checking how a directory layout will be read before handing it
//! to an annotation pipeline.
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// notetree - clinical note corpus reader
///
/// Walks a directory tree of notes in a stable order and reports the
/// document ids and patient grouping each file will receive.
#[derive(Parser, Debug)]
#[command(name = "notetree")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Deterministic clinical note corpus reader", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the corpus in read order with patient counts
    Scan(commands::ScanCommandArgs),

    /// Read every document through the corpus reader
    Read(commands::ReadArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    let config = Config::load()?;

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, &config, cli.format),
        Commands::Read(args) => commands::read::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
    }
}
