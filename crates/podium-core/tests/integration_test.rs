//! Integration tests for loading data files from disk and indexing them.

use std::fs;

use podium_core::{Catalog, Error};
use tempfile::TempDir;

/// Test loading a bare list document end to end
#[test]
fn test_load_bare_list_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("presentations.json");
    fs::write(
        &path,
        r#"[{"name":"Ada","title":"X","theme":"AI","tags":["growth"]}]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).expect("Failed to load catalog");

    assert_eq!(catalog.speakers().len(), 1);
    assert_eq!(catalog.themes().get("ai"), Some(&vec![0]));
    assert_eq!(catalog.themes().get("growth"), Some(&vec![0]));
}

/// Test loading a wrapped document end to end
#[test]
fn test_load_wrapped_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("presentations.json");
    fs::write(
        &path,
        r#"{"speakers": [{"name": "Ada"}, {"name": "Amy", "tags": ["Courage"]}]}"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).expect("Failed to load catalog");

    assert_eq!(catalog.names().keys().collect::<Vec<_>>(), vec!["ada", "amy"]);
    assert_eq!(catalog.sorted_themes(), vec!["courage"]);
}

/// Test that a missing file is reported, not panicked on
#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = Catalog::load(&path).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().starts_with("Could not find data file at:"));
}

/// Test that a malformed file is reported, not panicked on
#[test]
fn test_load_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("presentations.json");
    fs::write(&path, "\"just a string\"").unwrap();

    let err = Catalog::load(&path).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Data format not recognized. Expected a list of speaker records."
    );
}

/// Test that an empty list produces an empty catalog
#[test]
fn test_load_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("presentations.json");
    fs::write(&path, "[]").unwrap();

    let catalog = Catalog::load(&path).expect("Failed to load catalog");

    assert!(catalog.is_empty());
    assert!(catalog.names().is_empty());
    assert!(catalog.themes().is_empty());
}
