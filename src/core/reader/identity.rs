//! Document identity derived from a file's path and metadata.

use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::reader::extension::ExtensionSet;

/// Document type used when the id carries no `_TYPE` suffix
pub const CLINICAL_NOTE: &str = "ClinicalNote";

/// `yyyyMMddhhmm`, 12-hour clock, no seconds or zone
pub const DOCUMENT_TIME_FORMAT: &str = "%Y%m%d%I%M";

/// Document id: the file name without its extension
///
/// The longest configured extension wins. With no configured match,
/// everything from the last dot is dropped. Names without a dot are
/// returned whole.
pub fn document_id(file_name: &str, extensions: &ExtensionSet) -> String {
    let cut = match extensions.longest_match(file_name) {
        Some(ext) => Some(file_name.len() - ext.len()),
        None => file_name.rfind('.'),
    };

    match cut {
        Some(end) => file_name[..end].to_string(),
        None => file_name.to_string(),
    }
}

/// Relative directory between `root` and the file
///
/// Empty when the file sits directly under `root` or outside it.
pub fn id_prefix(file: &Path, root: &Path) -> String {
    file.parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .map(|rel| rel.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Document type: whatever follows the last underscore of the id
pub fn document_type(document_id: &str) -> String {
    match document_id.rfind('_') {
        Some(idx) if idx + 1 < document_id.len() => document_id[idx + 1..].to_string(),
        _ => CLINICAL_NOTE.to_string(),
    }
}

/// Format a timestamp in local time as `yyyyMMddhhmm`
pub fn format_document_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format(DOCUMENT_TIME_FORMAT).to_string()
}

/// Document time from file metadata
///
/// Falls back to the Unix epoch when the platform has no mtime.
pub fn document_time(metadata: Option<&Metadata>) -> String {
    let modified = metadata
        .and_then(|m| m.modified().ok())
        .unwrap_or(UNIX_EPOCH);
    format_document_time(modified)
}
