//! Per-scan progress through the corpus.

use serde::Serialize;

/// `(current, total)` position of one corpus read, keyed by root path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressTracker {
    key: String,
    current: usize,
    total: usize,
}

impl ProgressTracker {
    /// Start tracking `total` documents for the given root
    pub fn new(key: impl Into<String>, total: usize) -> Self {
        let key = key.into();
        tracing::debug!("Progress for {} initialized with {} documents", key, total);
        Self {
            key,
            current: 0,
            total,
        }
    }

    /// Record the index of the document being read
    pub fn update(&mut self, current: usize) {
        self.current = current.min(self.total);
    }

    /// Mark every document as read
    pub fn complete(&mut self) {
        if self.current != self.total {
            tracing::debug!("Progress for {} complete ({} documents)", self.key, self.total);
        }
        self.current = self.total;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Snapshot as `(current, total)`
    pub fn snapshot(&self) -> (usize, usize) {
        (self.current, self.total)
    }

    /// Fraction read, 1.0 for an empty corpus
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}
