//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{Config, ScanConfig};
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also log the configuration through tracing
    #[arg(long, short = 'l')]
    pub log: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File actually loaded, `None` when running on defaults
    pub config_file: Option<String>,
    pub scan: ScanConfig,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        config.log_config();
    }

    let response = ConfigResponse {
        config_file: config
            .source
            .as_ref()
            .map(|path| path.display().to_string()),
        scan: config.scan.clone(),
    };

    match format {
        OutputFormat::Human => {
            let scan = &response.scan;
            println!("Configuration:");
            println!(
                "  config_file: {}",
                response.config_file.as_deref().unwrap_or("(defaults)")
            );
            println!("  scan:");
            println!("    root: {}", scan.root.display());
            println!("    extensions: {:?}", scan.extensions);
            println!("    patient_level: {}", scan.patient_level);
            println!("    keep_cr: {}", scan.keep_cr);
            println!("    cr_to_space: {}", scan.cr_to_space);
            println!(
                "    encoding: {}",
                scan.encoding.as_deref().unwrap_or("Unknown")
            );
            println!("    skip_unreadable: {}", scan.skip_unreadable);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
