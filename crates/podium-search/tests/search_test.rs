//! Search behaviour against parsed speaker documents, including the data
//! file shipped with the repository.

use std::collections::HashSet;

use podium_core::{store, Catalog};
use podium_search::{find_by_name, find_by_theme, NameLookup, Selection, ThemeLookup};

const SHIPPED_DATA: &str = include_str!("../../../data/presentations.json");

fn catalog(json: &str) -> Catalog {
    Catalog::new(store::parse(json).expect("Failed to parse speakers"))
}

/// Every loaded name is found by its exact lower-cased form
#[test]
fn test_every_name_found_exactly() {
    let catalog = catalog(SHIPPED_DATA);
    assert!(!catalog.is_empty());

    for speaker in catalog.speakers() {
        let key = speaker.name_key().expect("shipped speakers are named");
        match find_by_name(&catalog, &key) {
            NameLookup::Found(found) => assert_eq!(found, speaker),
            other => panic!("expected Found for {key}, got {other:?}"),
        }
    }
}

/// A partial name resolves through disambiguation
#[test]
fn test_disambiguate_partial_name() {
    let catalog = catalog(
        r#"[{"name": "Ada", "title": "X"}, {"name": "Amy"}, {"name": "Bo"}]"#,
    );

    let NameLookup::Ambiguous(candidates) = find_by_name(&catalog, "A") else {
        panic!("expected Ambiguous");
    };
    assert_eq!(candidates.len(), 2);

    match candidates.select("1") {
        Selection::Chosen(speaker) => assert_eq!(speaker.title.as_deref(), Some("X")),
        other => panic!("expected Chosen, got {other:?}"),
    }
}

/// Theme and tag keys are both searchable and results are unique by name
#[test]
fn test_theme_results_unique_by_name() {
    let catalog = catalog(SHIPPED_DATA);

    let ThemeLookup::Found(speakers) = find_by_theme(&catalog, "growth") else {
        panic!("expected Found");
    };
    let names: HashSet<&str> = speakers.iter().map(|s| s.listing_name()).collect();
    let total = speakers.len();
    assert_eq!(names.len(), total);
    assert_eq!(total, 3);
}

/// Name search does not de-duplicate, theme search does
#[test]
fn test_name_and_theme_dedup_differ() {
    let catalog = catalog(
        r#"{"speakers": [
            {"name": "Ada", "theme": "AI"},
            {"name": "Ada Lovelace", "theme": "AI"},
            {"name": "Ada", "tags": ["ai"]}
        ]}"#,
    );

    match find_by_theme(&catalog, "ai") {
        ThemeLookup::Found(speakers) => assert_eq!(speakers.len(), 2),
        other => panic!("expected Found, got {other:?}"),
    }

    match find_by_name(&catalog, "ada l") {
        NameLookup::Found(speaker) => assert_eq!(speaker.listing_name(), "Ada Lovelace"),
        other => panic!("expected Found, got {other:?}"),
    }
}
