//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command. Scan options shared by `scan` and `read`
//! live here.

pub mod config;
pub mod read;
pub mod scan;

use clap::Args;
use std::path::PathBuf;

use crate::core::config::{Config, ScanConfig};

// Re-export argument types for use in mod.rs
pub use config::ConfigArgs;
pub use read::ReadArgs;
pub use scan::ScanCommandArgs;

/// Scan options; anything left unset falls back to the loaded config
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Root directory or single file (defaults to the configured root)
    pub path: Option<PathBuf>,

    /// Accepted extension, repeatable (e.g. -x txt -x note)
    #[arg(long = "extension", short = 'x')]
    pub extensions: Vec<String>,

    /// Directory depth whose names are patient ids (root = 0)
    #[arg(long)]
    pub patient_level: Option<usize>,

    /// Replace CRLF line endings with LF
    #[arg(long)]
    pub strip_cr: bool,

    /// Replace CRLF with LF + space, keeping character offsets
    #[arg(long)]
    pub cr_to_space: bool,

    /// Character encoding hint
    #[arg(long)]
    pub encoding: Option<String>,

    /// Skip files that cannot be read instead of stopping
    #[arg(long)]
    pub skip_unreadable: bool,
}

impl ScanArgs {
    /// Overlay command-line options on the configured scan settings
    pub fn to_scan_config(&self, config: &Config) -> ScanConfig {
        let mut scan = config.scan.clone();

        if let Some(path) = &self.path {
            scan.root = path.clone();
        }
        if !self.extensions.is_empty() {
            scan.extensions = self.extensions.clone();
        }
        if let Some(level) = self.patient_level {
            scan.patient_level = level;
        }
        if self.strip_cr {
            scan.keep_cr = false;
        }
        if self.cr_to_space {
            scan.cr_to_space = true;
        }
        if let Some(encoding) = &self.encoding {
            scan.encoding = Some(encoding.clone());
        }
        if self.skip_unreadable {
            scan.skip_unreadable = true;
        }

        scan
    }
}
