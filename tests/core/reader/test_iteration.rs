// Pull protocol tests: has_next/get_next, progress, normalization

use crate::common::{open_reader, read_all, TestTree};
use notetree::core::config::ScanConfig;
use notetree::core::error::{NoteTreeError, Result};
use notetree::core::reader::CorpusReader;
use std::path::Path;

#[test]
fn test_progress_reaches_total_only_when_exhausted() {
    let tree = TestTree::two_patients();
    let mut reader = open_reader(&ScanConfig::new(tree.path()));
    let total = reader.note_count();

    while reader.has_next() {
        assert_ne!(reader.progress(), (total, total));
        reader.get_next().unwrap();
        assert_ne!(reader.progress(), (total, total));
    }

    assert_eq!(reader.progress(), (total, total));
}

#[test]
fn test_missing_root_fails_open() {
    let err = CorpusReader::open(&ScanConfig::new("/no/such/notes/root"))
        .err()
        .unwrap();
    assert!(matches!(err, NoteTreeError::InvalidPath(_)));
}

#[test]
fn test_empty_root_reads_nothing() {
    let tree = TestTree::with_files(&[]);
    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    assert!(read_all(&mut reader).is_empty());
    assert_eq!(reader.progress(), (0, 0));
    assert!(reader.registry().is_empty());
}

#[test]
fn test_empty_subdirectory_is_not_an_error() {
    let tree = TestTree::two_patients();
    std::fs::create_dir_all(tree.path().join("patientC/empty")).unwrap();
    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    assert_eq!(read_all(&mut reader).len(), 3);
    assert_eq!(reader.registry().wanted_doc_count("patientC"), Some(0));
}

#[test]
fn test_text_normalization_policies() {
    let tree = TestTree::with_files(&[("p/crlf.txt", "line one\r\nline two")]);

    let mut keep = open_reader(&ScanConfig::new(tree.path()));
    assert_eq!(keep.get_next().unwrap().text, "line one\r\nline two\n");

    let mut config = ScanConfig::new(tree.path());
    config.keep_cr = false;
    let mut strip = open_reader(&config);
    assert_eq!(strip.get_next().unwrap().text, "line one\nline two\n");

    config.cr_to_space = true;
    let mut space = open_reader(&config);
    assert_eq!(space.get_next().unwrap().text, "line one\n line two\n");
}

#[test]
fn test_empty_file_stays_empty() {
    let tree = TestTree::with_files(&[("p/empty.txt", "")]);
    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    assert_eq!(reader.get_next().unwrap().text, "");
}

#[test]
fn test_iterator_matches_pull_protocol() {
    let tree = TestTree::multi_site();
    let config = ScanConfig::new(tree.path()).with_patient_level(2);

    let mut pulled = open_reader(&config);
    let pulled = read_all(&mut pulled);
    let iterated: Vec<_> = open_reader(&config).map(|d| d.unwrap()).collect();

    assert_eq!(pulled, iterated);
}

#[test]
fn test_unreadable_file_aborts_by_default() {
    let tree = TestTree::two_patients();
    let config = ScanConfig::new(tree.path());
    let mut reader = CorpusReader::with_reader(&config, |path: &Path, _: Option<&str>| {
        Err(NoteTreeError::ReadFailed {
            path: path.display().to_string(),
            message: "device not ready".to_string(),
        })
    })
    .unwrap();

    assert!(reader.has_next());
    let err = reader.get_next().unwrap_err();
    assert!(err.to_string().contains("device not ready"));
}

#[test]
fn test_skip_unreadable_continues() {
    let tree = TestTree::two_patients();
    let mut config = ScanConfig::new(tree.path());
    config.skip_unreadable = true;

    let reader = CorpusReader::with_reader(&config, |path: &Path, _: Option<&str>| -> Result<String> {
        if path.ends_with("patientA/doc2.txt") {
            Err(NoteTreeError::ReadFailed {
                path: path.display().to_string(),
                message: "truncated".to_string(),
            })
        } else {
            Ok(std::fs::read_to_string(path)?)
        }
    })
    .unwrap();

    let docs: Vec<_> = reader.map(|d| d.unwrap()).collect();
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d.document_id == "doc1"));
}
