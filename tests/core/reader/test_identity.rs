// Document identity tests over real files

use crate::common::{open_reader, read_all, TestTree};
use notetree::core::config::ScanConfig;
use notetree::core::reader::identity::CLINICAL_NOTE;
use std::path::Path;

#[test]
fn test_discharge_summary_identity() {
    let tree = TestTree::with_files(&[("patientA/report_DISCHARGE.txt", "Discharged.\n")]);
    let mut reader = open_reader(&ScanConfig::new(tree.path()).with_extensions([".txt"]));

    let doc = &read_all(&mut reader)[0];
    assert_eq!(doc.document_id, "report_DISCHARGE");
    assert_eq!(doc.document_type, "DISCHARGE");
    assert_eq!(doc.id_prefix, "patientA");
    assert!(doc.path.is_absolute());
    assert_eq!(doc.document_time.len(), 12);
    assert!(doc.document_time.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_unconfigured_extension_strips_last_dot() {
    let tree = TestTree::with_files(&[("patientA/report.note", "x")]);
    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    let doc = &read_all(&mut reader)[0];
    assert_eq!(doc.document_id, "report");
    assert_eq!(doc.document_type, CLINICAL_NOTE);
}

#[test]
fn test_longest_extension_wins() {
    let tree = TestTree::with_files(&[("p/visit_3.pipe.txt", "x")]);
    let config = ScanConfig::new(tree.path()).with_extensions(["txt", "pipe.txt"]);
    let mut reader = open_reader(&config);

    let doc = &read_all(&mut reader)[0];
    assert_eq!(doc.document_id, "visit_3");
    assert_eq!(doc.document_type, "3");
}

#[test]
fn test_nested_id_prefix() {
    let tree = TestTree::multi_site();
    let mut reader = open_reader(&ScanConfig::new(tree.path()).with_patient_level(2));

    let docs = read_all(&mut reader);
    let rad = docs.iter().find(|d| d.document_id == "note2_RAD").unwrap();
    assert_eq!(rad.id_prefix, Path::new("site1").join("patient7").to_string_lossy());
    assert_eq!(rad.document_type, "RAD");
}

#[test]
fn test_colliding_ids_are_kept() {
    let tree = TestTree::two_patients();
    let mut reader = open_reader(&ScanConfig::new(tree.path()));

    let docs = read_all(&mut reader);
    let doc1s: Vec<_> = docs.iter().filter(|d| d.document_id == "doc1").collect();
    assert_eq!(doc1s.len(), 2);
    assert_ne!(doc1s[0].id_prefix, doc1s[1].id_prefix);
}
