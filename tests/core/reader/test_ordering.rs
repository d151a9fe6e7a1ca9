// Ordering tests: natural order, files before subdirectories, determinism

use crate::common::{open_reader, relative_names, TestTree};
use notetree::core::config::ScanConfig;

#[test]
fn test_numbered_notes_in_natural_order() {
    let tree = TestTree::numbered(12);
    let reader = open_reader(&ScanConfig::new(tree.path()));

    let names = relative_names(&reader);
    let expected: Vec<String> = (1..=12).map(|i| format!("p1/note{i}.txt")).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_patient_directories_in_natural_order() {
    let tree = TestTree::with_files(&[
        ("patient10/a.txt", "x"),
        ("patient2/a.txt", "x"),
        ("patient1/a.txt", "x"),
    ]);
    let reader = open_reader(&ScanConfig::new(tree.path()));

    assert_eq!(
        relative_names(&reader),
        vec!["patient1/a.txt", "patient2/a.txt", "patient10/a.txt"]
    );
}

#[test]
fn test_files_precede_deeper_subdirectories() {
    let tree = TestTree::with_files(&[
        ("p/visits/2/z.txt", "x"),
        ("p/visits/10/a.txt", "x"),
        ("p/visits/summary.txt", "x"),
        ("p/intake.txt", "x"),
        ("top.txt", "x"),
    ]);
    let reader = open_reader(&ScanConfig::new(tree.path()));

    assert_eq!(
        relative_names(&reader),
        vec![
            "top.txt",
            "p/intake.txt",
            "p/visits/summary.txt",
            "p/visits/2/z.txt",
            "p/visits/10/a.txt",
        ]
    );
}

#[test]
fn test_repeated_scans_are_identical() {
    let tree = TestTree::multi_site();
    let config = ScanConfig::new(tree.path()).with_patient_level(2);

    let first = open_reader(&config);
    let second = open_reader(&config);

    assert_eq!(first.entries(), second.entries());
    assert_eq!(first.registry(), second.registry());
}

#[test]
fn test_extension_filter_and_hidden_files() {
    let tree = TestTree::with_files(&[
        ("p/.DS_Store", "x"),
        ("p/.txt", "x"),
        ("p/keep.txt", "x"),
        ("p/image.png", "x"),
        ("p/.hidden_dir/inside.txt", "x"),
    ]);
    let config = ScanConfig::new(tree.path()).with_extensions(["txt"]);
    let reader = open_reader(&config);

    // Hidden directories are still walked, only hidden files are dropped
    assert_eq!(
        relative_names(&reader),
        vec!["p/keep.txt", "p/.hidden_dir/inside.txt"]
    );
}
