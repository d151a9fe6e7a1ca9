// Filesystem edge cases: permissions and symlinks

use crate::common::{open_reader, read_all, relative_names, TestTree};
use notetree::core::config::ScanConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Restores directory permissions so the temp tree can be removed
struct Unlock(PathBuf);

impl Drop for Unlock {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.0, fs::Permissions::from_mode(0o755));
    }
}

fn lock(dir: &Path) -> Unlock {
    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    Unlock(dir.to_path_buf())
}

#[test]
fn test_unreadable_patient_directory_is_skipped() {
    let tree = TestTree::with_files(&[
        ("patientA/doc1.txt", "a"),
        ("patientB/doc1.txt", "b"),
        ("patientC/doc1.txt", "c"),
    ]);
    let locked = tree.path().join("patientB");
    let _unlock = lock(&locked);

    // Permission bits do not bind a privileged user
    if fs::read_dir(&locked).is_ok() {
        return;
    }

    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    assert_eq!(
        relative_names(&reader),
        vec!["patientA/doc1.txt", "patientC/doc1.txt"]
    );
    let registry = reader.registry();
    assert_eq!(registry.wanted_doc_count("patientA"), Some(1));
    assert_eq!(registry.wanted_doc_count("patientB"), None);
    assert_eq!(registry.wanted_doc_count("patientC"), Some(1));

    let texts: Vec<String> = read_all(&mut reader).into_iter().map(|d| d.text).collect();
    assert_eq!(texts, vec!["a\n", "c\n"]);
}

#[test]
fn test_symlinked_patient_directory_is_followed() {
    let tree = TestTree::with_files(&[("patientA/doc1.txt", "a")]);
    let elsewhere = TestTree::with_files(&[("doc1.txt", "b1"), ("doc2.txt", "b2")]);
    std::os::unix::fs::symlink(elsewhere.path(), tree.path().join("patientB")).unwrap();

    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    assert_eq!(
        relative_names(&reader),
        vec!["patientA/doc1.txt", "patientB/doc1.txt", "patientB/doc2.txt"]
    );
    assert_eq!(reader.registry().wanted_doc_count("patientB"), Some(2));

    let docs = read_all(&mut reader);
    assert_eq!(docs[1].patient_id.as_deref(), Some("patientB"));
    assert_eq!(docs[1].id_prefix, "patientB");
    assert_eq!(docs[2].text, "b2\n");
}
