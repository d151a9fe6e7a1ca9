//! Core domain logic (presentation-agnostic)
//!
//! This module contains everything needed to read a corpus without
//! any terminal or output concerns.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Corpus entries and documents
//! - **xdg**: XDG config directory handling
//! - **reader**: Directory walk, identity, normalization, iteration

pub mod config;
pub mod error;
pub mod reader;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::{Config, ScanConfig};
pub use error::{NoteTreeError, Result};
pub use reader::CorpusReader;
