//! Corpus reading module.
//!
//! Turns a directory tree of clinical notes into an ordered stream of
//! documents. Key features:
//!
//! - Deterministic, natural-order depth-first walk
//! - Extension allow-list with hidden file exclusion
//! - Patient grouping by directory depth
//! - Document identity derived from file names and paths
//! - Line-ending normalization
//! - Pull-based reading with per-scan progress
//!
//! # Determinism
//!
//! Filesystem listing order is never trusted. Files and directories
//! are sorted at every level, so the same tree always produces the
//! same sequence and the same document ids.

pub mod corpus;
pub mod extension;
pub mod identity;
pub mod natural;
pub mod normalizer;
pub mod progress;
pub mod registry;
pub mod source;
pub mod walker;

pub use corpus::CorpusReader;
pub use extension::ExtensionSet;
pub use normalizer::TextNormalizer;
pub use progress::ProgressTracker;
pub use registry::PatientRegistry;
pub use source::{FileReader, TextFileReader};
pub use walker::{DirectoryWalker, ScanOutcome};
