//! Configuration management for the notetree corpus reader.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{NoteTreeError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Settings for one corpus scan
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Root directory (or single file) to read
    #[serde(default)]
    pub root: PathBuf,

    /// Accepted extensions; empty, `*` or `.*` accepts every file
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Directory depth (root = 0) whose names are patient ids
    #[serde(default = "default_patient_level")]
    pub patient_level: usize,

    /// Keep existing `\r\n` line endings
    #[serde(default = "default_keep_cr")]
    pub keep_cr: bool,

    /// Rewrite `\r\n` as `\n ` (offset preserving)
    #[serde(default)]
    pub cr_to_space: bool,

    /// Character encoding hint, informational only
    #[serde(default)]
    pub encoding: Option<String>,

    /// Log and skip unreadable files instead of yielding the error
    #[serde(default)]
    pub skip_unreadable: bool,
}

// Default value functions
fn default_patient_level() -> usize {
    1
}

fn default_keep_cr() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            extensions: Vec::new(),
            patient_level: default_patient_level(),
            keep_cr: default_keep_cr(),
            cr_to_space: false,
            encoding: None,
            skip_unreadable: false,
        }
    }
}

impl ScanConfig {
    /// Defaults for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_patient_level(mut self, level: usize) -> Self {
        self.patient_level = level;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Validate scan settings
    ///
    /// Existence of the root is checked when the scan starts.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(NoteTreeError::ConfigError(
                "Root path is required".to_string(),
            ));
        }

        if self.extensions.iter().any(|e| e.trim() == ".") {
            return Err(NoteTreeError::ConfigError(
                "Extension '.' matches every dotted name, use '*' to accept all files".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NoteTreeError::ConfigError(format!("Failed to read config file: {e}")))?;

        let mut config: Config = toml::from_str(&contents)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. NOTETREE_CONFIG env var
    /// 2. XDG config file (~/.config/notetree/config.toml)
    /// 3. ./notetree.toml
    /// 4. Defaults
    ///
    /// The root is not required here; callers usually supply it on
    /// the command line and validate the resulting `ScanConfig`.
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("NOTETREE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("notetree.toml").exists() {
                Self::from_file("notetree.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("NOTETREE_ROOT") {
            self.scan.root = PathBuf::from(root);
        }
        if let Ok(extensions) = env::var("NOTETREE_EXTENSIONS") {
            self.scan.extensions = extensions
                .split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect();
        }
        if let Ok(level) = env::var("NOTETREE_PATIENT_LEVEL") {
            if let Ok(l) = level.parse() {
                self.scan.patient_level = l;
            }
        }
        if let Ok(keep_cr) = env::var("NOTETREE_KEEP_CR") {
            if let Ok(k) = keep_cr.parse() {
                self.scan.keep_cr = k;
            }
        }
        if let Ok(cr_to_space) = env::var("NOTETREE_CR_TO_SPACE") {
            if let Ok(c) = cr_to_space.parse() {
                self.scan.cr_to_space = c;
            }
        }
        if let Ok(encoding) = env::var("NOTETREE_ENCODING") {
            self.scan.encoding = Some(encoding);
        }
        if let Ok(skip) = env::var("NOTETREE_SKIP_UNREADABLE") {
            if let Ok(s) = skip.parse() {
                self.scan.skip_unreadable = s;
            }
        }
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Root: {:?}", self.scan.root);
        if self.scan.extensions.is_empty() {
            tracing::info!("  Extensions: all");
        } else {
            tracing::info!("  Extensions: {:?}", self.scan.extensions);
        }
        tracing::info!("  Patient level: {}", self.scan.patient_level);
        tracing::info!("  Keep CR: {}", self.scan.keep_cr);
        tracing::info!("  CR to space: {}", self.scan.cr_to_space);
        tracing::info!(
            "  Encoding: {}",
            self.scan.encoding.as_deref().unwrap_or("Unknown")
        );
        tracing::info!("  Skip unreadable: {}", self.scan.skip_unreadable);
    }
}
