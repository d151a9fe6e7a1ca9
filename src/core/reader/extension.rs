//! File extension allow-list.
//!
//! Decides which files belong to the corpus and strips extensions
//! when deriving document ids.

use std::path::Path;

/// Configured set of accepted file extensions
///
/// Extensions are stored with a leading dot. An empty set accepts
/// every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from user-supplied extensions
    ///
    /// `"txt"` and `".txt"` are equivalent. A single `"*"` or `".*"`
    /// means accept all. Blank entries are ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();

        if raw.len() == 1 && (raw[0] == "*" || raw[0] == ".*") {
            return Self::default();
        }

        let extensions = raw
            .into_iter()
            .map(|e| if e.starts_with('.') { e } else { format!(".{e}") })
            .collect();

        Self { extensions }
    }

    /// Set that accepts every file
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Normalized extensions, each with a leading dot
    pub fn as_slice(&self) -> &[String] {
        &self.extensions
    }

    /// Check whether a file name passes the allow-list
    ///
    /// A name that is exactly one of the extensions (e.g. a file
    /// called `.txt`) has no base name and is rejected.
    pub fn is_valid(&self, file_name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        match self.extensions.iter().find(|ext| file_name.ends_with(ext.as_str())) {
            Some(ext) if file_name == ext => {
                tracing::warn!(
                    "File {} name exactly matches extension {} so it will not be read",
                    file_name,
                    ext
                );
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Check a path by its file name
    pub fn is_valid_path(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.is_valid(&name.to_string_lossy()))
            .unwrap_or(false)
    }

    /// Longest configured extension that ends `file_name`, if any
    pub fn longest_match(&self, file_name: &str) -> Option<&str> {
        self.extensions
            .iter()
            .filter(|ext| file_name.ends_with(ext.as_str()))
            .max_by_key(|ext| ext.len())
            .map(String::as_str)
    }
}
