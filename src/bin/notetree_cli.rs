//! notetree CLI - command-line interface for the corpus reader
//!
//! # Examples
//!
//! ```bash
//! # List documents and patients under a root
//! notetree scan /data/notes -x txt
//!
//! # Read every document, two levels down for patient ids
//! notetree read /data/notes --patient-level 2 --format json
//!
//! # Show configuration
//! notetree show-config
//! ```

use clap::Parser;
use notetree::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notetree=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
