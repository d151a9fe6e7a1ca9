//! Deterministic directory walk producing corpus entries.
//!
//! Traverses the root depth-first with files before subdirectories at
//! every level, both in natural order, so an unchanged tree always
//! yields the same sequence. Patient document counts are collected in
//! the same pass. Unreadable directories are logged and skipped.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{NoteTreeError, Result};
use crate::core::reader::extension::ExtensionSet;
use crate::core::reader::identity;
use crate::core::reader::natural;
use crate::core::reader::registry::PatientRegistry;
use crate::core::types::{CorpusEntry, ScanStats};

/// Result of walking one root
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Canonical root that was walked
    pub root: PathBuf,

    /// Entries in walk order
    pub entries: Vec<CorpusEntry>,

    /// Documents expected per patient
    pub registry: PatientRegistry,

    /// Summary of the walk
    pub stats: ScanStats,
}

/// Directory walker with extension filtering and patient grouping
pub struct DirectoryWalker {
    /// Allow-list applied to file names
    extensions: ExtensionSet,

    /// Depth (root = 0) whose directory names are patient ids
    patient_level: usize,
}

impl DirectoryWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `extensions` - Accepted file extensions (empty accepts all)
    /// * `patient_level` - Directory depth that names patients
    pub fn new(extensions: ExtensionSet, patient_level: usize) -> Self {
        Self {
            extensions,
            patient_level,
        }
    }

    /// Walk `root` and collect every corpus entry
    ///
    /// A root that is a single file becomes a one-entry corpus for the
    /// patient named by its parent directory. A directory without
    /// subdirectories groups all of its files under its own name.
    ///
    /// # Returns
    ///
    /// The ordered entries and patient registry. Fails with
    /// `NoteTreeError::InvalidPath` if `root` does not exist, or
    /// `NoteTreeError::ScanFailed` if it is neither a file nor a directory
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        let start = Instant::now();

        let root = root.canonicalize().map_err(|e| {
            NoteTreeError::InvalidPath(format!("{}: {e}", root.display()))
        })?;
        let metadata = fs::metadata(&root)?;

        tracing::info!("Starting corpus scan of {:?}", root);

        let (entries, registry, level) = if metadata.is_file() {
            self.scan_single_file(&root, &metadata)
        } else if metadata.is_dir() {
            self.scan_directory(&root)
        } else {
            return Err(NoteTreeError::ScanFailed(format!(
                "{} is neither a file nor a directory",
                root.display()
            )));
        };

        report_id_collisions(&entries);

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Scan complete: {} documents for {} patients in {}ms",
            entries.len(),
            registry.len(),
            duration_ms
        );

        let stats = ScanStats {
            root: root.display().to_string(),
            documents: entries.len(),
            patients: registry.len(),
            patient_level: level,
            duration_ms,
        };

        Ok(ScanOutcome {
            root,
            entries,
            registry,
            stats,
        })
    }

    /// Extensions are not checked for an explicitly named file
    fn scan_single_file(
        &self,
        file: &Path,
        metadata: &fs::Metadata,
    ) -> (Vec<CorpusEntry>, PatientRegistry, usize) {
        let patient = file
            .parent()
            .map(dir_name)
            .unwrap_or_default();

        let mut registry = PatientRegistry::new();
        registry.set_wanted_doc_count(&patient, 1);

        let entry = self.build_entry(file, file, Some(patient), Some(metadata));
        (vec![entry], registry, self.patient_level)
    }

    fn scan_directory(&self, root: &Path) -> (Vec<CorpusEntry>, PatientRegistry, usize) {
        let mut has_children = false;
        let mut has_subdirs = false;
        for child in WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            has_children = true;
            if child.file_type().is_dir() {
                has_subdirs = true;
                break;
            }
        }

        if !has_children {
            tracing::debug!("Root {:?} is empty", root);
            return (Vec::new(), PatientRegistry::new(), self.patient_level);
        }

        let level = if has_subdirs {
            self.patient_level
        } else {
            tracing::debug!("Root {:?} has no subdirectories, grouping by root name", root);
            0
        };

        let mut entries = Vec::new();
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        if level == 0 {
            counts.insert(dir_name(root), 0);
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .sort_by(walk_order)
            .into_iter()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                // A patient directory is registered even when no files survive filtering
                if level > 0 && entry.depth() == level && lists_children(entry.path()) {
                    counts.entry(dir_name(entry.path())).or_insert(0);
                }
                continue;
            }

            if is_hidden(&entry) {
                tracing::debug!("Skipping hidden file: {:?}", entry.path());
                continue;
            }

            if !self.extensions.is_valid_path(entry.path()) {
                tracing::debug!("Skipping file with unlisted extension: {:?}", entry.path());
                continue;
            }

            let patient = patient_for(entry.path(), root, level);
            if let Some(patient) = &patient {
                *counts.entry(patient.clone()).or_insert(0) += 1;
            }

            let metadata = entry.metadata().ok();
            entries.push(self.build_entry(entry.path(), root, patient, metadata.as_ref()));
        }

        let mut registry = PatientRegistry::new();
        for (patient, count) in &counts {
            registry.set_wanted_doc_count(patient, *count);
        }

        (entries, registry, level)
    }

    fn build_entry(
        &self,
        path: &Path,
        root: &Path,
        patient_id: Option<String>,
        metadata: Option<&fs::Metadata>,
    ) -> CorpusEntry {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let document_id = identity::document_id(&file_name, &self.extensions);
        let document_type = identity::document_type(&document_id);

        CorpusEntry {
            path: path.to_path_buf(),
            id_prefix: identity::id_prefix(path, root),
            document_time: identity::document_time(metadata),
            document_id,
            document_type,
            patient_id,
        }
    }
}

/// Files before directories, then natural order by name
fn walk_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| natural::compare_os(a.file_name(), b.file_name()))
}

/// Patient id for a file, given the effective grouping depth
///
/// Depth 0 is the root itself. Files that do not live below a
/// directory at the grouping depth have no patient.
fn patient_for(path: &Path, root: &Path, level: usize) -> Option<String> {
    if level == 0 {
        return Some(dir_name(root));
    }

    let rel = path.strip_prefix(root).ok()?;
    let dirs: Vec<_> = rel
        .parent()?
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .collect();

    dirs.get(level - 1)
        .map(|name| name.to_string_lossy().into_owned())
}

/// Unreadable and empty directories contribute no patient
fn lists_children(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut children| children.next().is_some())
        .unwrap_or(false)
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

fn is_hidden(entry: &DirEntry) -> bool {
    if entry.file_name().to_string_lossy().starts_with('.') {
        return true;
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
        if let Ok(metadata) = entry.metadata() {
            return metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0;
        }
    }

    false
}

/// Ids are not disambiguated; surface collisions so callers can decide
fn report_id_collisions(entries: &[CorpusEntry]) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *seen.entry(entry.document_id.as_str()).or_insert(0) += 1;
    }

    let shared: Vec<&str> = seen
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(id, _)| *id)
        .collect();

    if !shared.is_empty() {
        tracing::warn!(
            "{} document ids are shared by more than one file (use id_prefix to tell them apart)",
            shared.len()
        );
        for id in shared {
            tracing::debug!("Shared document id: {}", id);
        }
    }
}
