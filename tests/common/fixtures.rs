// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Synthetic corpus tree in a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct TestTree {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestTree {
    /// Two patients, three notes, one patient with a numbered series
    #[allow(dead_code)] // Used in integration tests
    pub fn two_patients() -> Self {
        Self::with_files(&[
            ("patientA/doc1.txt", "Chief complaint: cough.\n"),
            ("patientA/doc2.txt", "Follow-up: improving.\n"),
            ("patientB/doc1.txt", "Chief complaint: rash.\n"),
        ])
    }

    /// Two sites, patients two levels down, one patient seen at both sites
    #[allow(dead_code)] // Used in integration tests
    pub fn multi_site() -> Self {
        Self::with_files(&[
            ("site1/patient7/note_PROGRESS.txt", "Stable.\n"),
            ("site1/patient7/note2_RAD.txt", "Impression: clear.\n"),
            ("site1/patient12/note_DISCHARGE.txt", "Discharged home.\n"),
            ("site2/patient7/note_PATH.txt", "Benign.\n"),
            ("site2/readme.txt", "Site 2 export.\n"),
        ])
    }

    /// A numbered series that sorts differently lexically and naturally
    #[allow(dead_code)] // Used in integration tests
    pub fn numbered(count: usize) -> Self {
        let specs: Vec<(String, String)> = (1..=count)
            .map(|i| (format!("p1/note{i}.txt"), format!("Note number {i}.\n")))
            .collect();

        Self::with_files(
            specs
                .iter()
                .map(|(f, c)| (f.as_str(), c.as_str()))
                .collect::<Vec<_>>()
                .as_slice(),
        )
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the tree root
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Name of the root directory itself
    #[allow(dead_code)] // Used in integration tests
    pub fn root_name(&self) -> String {
        self.dir
            .path()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }
}
