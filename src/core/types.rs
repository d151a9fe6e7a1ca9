//! Core data types for the notetree corpus reader.
//!
//! Defines the entries produced by a directory scan and the documents
//! materialized from them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One file discovered by a scan, with its derived identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Absolute source path
    pub path: PathBuf,

    /// File name without extension (not guaranteed unique)
    pub document_id: String,

    /// Directory path relative to the root, empty directly under root
    pub id_prefix: String,

    /// Directory name at the patient grouping depth
    ///
    /// `None` for files that sit above the grouping depth.
    pub patient_id: Option<String>,

    /// Suffix after the last underscore of the id, or `ClinicalNote`
    pub document_type: String,

    /// Last-modified time as `yyyyMMddhhmm`
    pub document_time: String,
}

/// A fully materialized document handed to the annotation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Normalized text
    pub text: String,

    pub document_id: String,
    pub id_prefix: String,
    pub patient_id: Option<String>,
    pub document_type: String,
    pub document_time: String,

    /// Absolute source path
    pub path: PathBuf,
}

impl Document {
    /// Attach normalized text to an entry's metadata
    pub fn from_entry(entry: &CorpusEntry, text: String) -> Self {
        Self {
            text,
            document_id: entry.document_id.clone(),
            id_prefix: entry.id_prefix.clone(),
            patient_id: entry.patient_id.clone(),
            document_type: entry.document_type.clone(),
            document_time: entry.document_time.clone(),
            path: entry.path.clone(),
        }
    }
}

/// Summary of a completed scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    /// Root that was scanned
    pub root: String,

    /// Number of corpus entries
    pub documents: usize,

    /// Number of distinct patients
    pub patients: usize,

    /// Patient grouping depth actually used (0 for a flat root)
    pub patient_level: usize,

    /// Scan duration in milliseconds
    pub duration_ms: u64,
}
