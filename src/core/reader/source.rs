//! Pluggable reading of one file's raw text.
//!
//! The corpus reader does not care how bytes become text. Callers can
//! hand it any [`FileReader`], including a plain closure.

use std::fs;
use std::path::Path;

use crate::core::error::{NoteTreeError, Result};

/// Reads the raw text of a single corpus file
pub trait FileReader {
    /// Read `path`. `encoding` is the configured hint, if any.
    fn read_text(&self, path: &Path, encoding: Option<&str>) -> Result<String>;
}

impl<F> FileReader for F
where
    F: Fn(&Path, Option<&str>) -> Result<String>,
{
    fn read_text(&self, path: &Path, encoding: Option<&str>) -> Result<String> {
        self(path, encoding)
    }
}

/// Default reader: file bytes decoded as UTF-8
///
/// Invalid sequences are replaced with U+FFFD and logged rather than
/// failing the document. The encoding hint is informational only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileReader;

impl FileReader for TextFileReader {
    fn read_text(&self, path: &Path, encoding: Option<&str>) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| NoteTreeError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!(
                    "{:?} is not valid UTF-8 (encoding hint: {}), replacing invalid bytes",
                    path,
                    encoding.unwrap_or("none")
                );
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}
