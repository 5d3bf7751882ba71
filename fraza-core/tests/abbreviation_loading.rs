//! Abbreviation source loading, including the fatal startup path.

use fraza_core::{AbbreviationSet, CoreError, Segmenter};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_a_line_delimited_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("abbreviations.txt");
    fs::write(&path, "др.\n  см. \n\nруб.\n   \nтыс.\n").unwrap();

    let set = AbbreviationSet::from_path(&path).unwrap();
    assert_eq!(set.len(), 4);
    assert!(set.contains("см."));
    assert!(set.contains("тыс."));
}

#[test]
fn missing_file_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let error = AbbreviationSet::from_path(&path).unwrap_err();
    match &error {
        CoreError::AbbreviationSource { path: reported, .. } => {
            assert_eq!(reported, &path);
        }
        other => panic!("expected AbbreviationSource error, got {other:?}"),
    }
    assert!(error.to_string().contains("does-not-exist.txt"));
}

#[test]
fn builder_propagates_a_load_failure() {
    let error = Segmenter::builder()
        .abbreviations_file("/definitely/not/here/abbr.txt")
        .build()
        .unwrap_err();
    assert!(matches!(error, CoreError::AbbreviationSource { .. }));
}

#[test]
fn builder_loads_the_file_it_is_given() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("abbreviations.txt");
    fs::write(&path, "руб.\nсм.\n").unwrap();

    let segmenter = Segmenter::builder()
        .abbreviations_file(&path)
        .build()
        .unwrap();
    assert_eq!(segmenter.abbreviations().len(), 2);

    let sentences = segmenter
        .detect_sentences("Смотрите см. выше за деталями. Продолжение следует.")
        .unwrap();
    assert_eq!(
        sentences,
        vec!["Смотрите см. выше за деталями.", "Продолжение следует."]
    );
}

#[test]
fn empty_file_loads_as_an_empty_set() {
    // An empty but readable file is a configuration choice, not an error.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("abbreviations.txt");
    fs::write(&path, "\n\n").unwrap();

    let set = AbbreviationSet::from_path(&path).unwrap();
    assert!(set.is_empty());
}
