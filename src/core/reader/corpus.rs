//! Pull-based reading of a scanned corpus.
//!
//! The walk runs once in [`CorpusReader::open`]. After that the caller
//! alternates `has_next` / `get_next`, and each `get_next` reads exactly
//! one file:
//!
//! 1. Report progress for the current position
//! 2. Advance the cursor
//! 3. Read the file through the configured [`FileReader`]
//! 4. Normalize line endings and attach identity metadata

use std::path::{Path, PathBuf};

use crate::core::config::ScanConfig;
use crate::core::error::Result;
use crate::core::reader::extension::ExtensionSet;
use crate::core::reader::normalizer::TextNormalizer;
use crate::core::reader::progress::ProgressTracker;
use crate::core::reader::registry::PatientRegistry;
use crate::core::reader::source::{FileReader, TextFileReader};
use crate::core::reader::walker::DirectoryWalker;
use crate::core::types::{CorpusEntry, Document, ScanStats};

/// Encoding reported when none was configured
pub const UNKNOWN_ENCODING: &str = "Unknown";

/// Sequential reader over one root's documents
pub struct CorpusReader {
    root: PathBuf,
    entries: Vec<CorpusEntry>,
    registry: PatientRegistry,
    tracker: ProgressTracker,
    stats: ScanStats,
    cursor: usize,
    normalizer: TextNormalizer,
    file_reader: Box<dyn FileReader>,
    encoding: Option<String>,
    skip_unreadable: bool,
}

impl CorpusReader {
    /// Scan the configured root and read files as UTF-8 text
    pub fn open(config: &ScanConfig) -> Result<Self> {
        Self::with_reader(config, TextFileReader)
    }

    /// Scan the configured root, reading files with `file_reader`
    ///
    /// # Returns
    ///
    /// A reader positioned at the first document, or an error if the
    /// configuration is invalid or the root does not exist
    pub fn with_reader<R>(config: &ScanConfig, file_reader: R) -> Result<Self>
    where
        R: FileReader + 'static,
    {
        config.validate()?;

        let walker = DirectoryWalker::new(
            ExtensionSet::new(&config.extensions),
            config.patient_level,
        );
        let outcome = walker.scan(&config.root)?;

        let tracker = ProgressTracker::new(
            config.root.display().to_string(),
            outcome.entries.len(),
        );

        Ok(Self {
            root: outcome.root,
            entries: outcome.entries,
            registry: outcome.registry,
            tracker,
            stats: outcome.stats,
            cursor: 0,
            normalizer: TextNormalizer::new(config.keep_cr, config.cr_to_space),
            file_reader: Box::new(file_reader),
            encoding: config.encoding.clone(),
            skip_unreadable: config.skip_unreadable,
        })
    }

    /// Whether another document is available
    ///
    /// Once this returns false, progress is reported as complete.
    pub fn has_next(&mut self) -> bool {
        let has_next = self.cursor < self.entries.len();
        if !has_next {
            self.tracker.complete();
        }
        has_next
    }

    /// Read the document at the cursor and advance
    ///
    /// A read failure is returned as `NoteTreeError::ReadFailed`; the
    /// cursor has already moved past the failing entry.
    ///
    /// # Panics
    ///
    /// Panics if called after the corpus is exhausted. Check
    /// [`has_next`](Self::has_next) first.
    pub fn get_next(&mut self) -> Result<Document> {
        assert!(
            self.cursor < self.entries.len(),
            "get_next called on exhausted corpus reader for {:?}",
            self.root
        );

        let entry = &self.entries[self.cursor];
        self.tracker.update(self.cursor);
        self.cursor += 1;

        tracing::info!("Reading {} : {:?}", entry.document_id, entry.path);
        let raw = self
            .file_reader
            .read_text(&entry.path, self.encoding.as_deref())?;
        let text = self.normalizer.normalize(&raw);
        tracing::debug!("Finished reading {} ({} chars)", entry.document_id, text.len());

        Ok(Document::from_entry(entry, text))
    }

    /// Progress as `(current, total)`
    pub fn progress(&self) -> (usize, usize) {
        self.tracker.snapshot()
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Total number of documents in the corpus
    pub fn note_count(&self) -> usize {
        self.entries.len()
    }

    /// Canonical root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries in read order
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Patient document counts for downstream patient assembly
    pub fn registry(&self) -> &PatientRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Configured encoding hint, or `Unknown`
    pub fn encoding(&self) -> &str {
        match self.encoding.as_deref() {
            Some(enc) if !enc.is_empty() => enc,
            _ => UNKNOWN_ENCODING,
        }
    }
}

impl Iterator for CorpusReader {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if !self.has_next() {
                return None;
            }
            match self.get_next() {
                Err(e) if self.skip_unreadable && e.is_read_failure() => {
                    tracing::warn!("Skipping unreadable document: {}", e);
                }
                result => return Some(result),
            }
        }
    }
}
