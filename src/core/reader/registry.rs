//! Patient document counts collected during a scan.
//!
//! Filled once by the walker, then handed by reference to whatever
//! assembles per-patient results downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expected number of documents per patient id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistry {
    wanted: BTreeMap<String, usize>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` documents to a patient
    ///
    /// Counts accumulate, so two directories with the same name at
    /// the grouping depth contribute to one patient.
    pub fn set_wanted_doc_count(&mut self, patient_id: &str, count: usize) {
        *self.wanted.entry(patient_id.to_string()).or_insert(0) += count;
    }

    /// Expected document count for a patient, if the patient was seen
    pub fn wanted_doc_count(&self, patient_id: &str) -> Option<usize> {
        self.wanted.get(patient_id).copied()
    }

    /// Number of distinct patients
    pub fn len(&self) -> usize {
        self.wanted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wanted.is_empty()
    }

    /// Sum of all patient counts
    pub fn total_documents(&self) -> usize {
        self.wanted.values().sum()
    }

    /// Patients with their counts, ordered by patient id
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.wanted.iter().map(|(id, count)| (id.as_str(), *count))
    }
}
