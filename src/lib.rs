//! notetree - Clinical note corpus reader
//!
//! Reads a directory tree of text notes one document at a time, in a
//! stable order, deriving document ids and patient grouping from the
//! directory layout.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - reader (walk, identity, normalization, iteration)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use notetree::{CorpusReader, ScanConfig};
//!
//! let config = ScanConfig::new("/data/notes").with_extensions(["txt"]);
//! let mut reader = CorpusReader::open(&config)?;
//! while reader.has_next() {
//!     let doc = reader.get_next()?;
//!     println!("{} {:?}", doc.document_id, doc.patient_id);
//! }
//! # Ok::<(), notetree::NoteTreeError>(())
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::{Config, ScanConfig};
pub use core::error::{NoteTreeError, Result};
pub use core::reader::{CorpusReader, FileReader, PatientRegistry, ProgressTracker};
pub use core::types::*;
