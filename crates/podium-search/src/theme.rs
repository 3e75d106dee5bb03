use std::collections::HashSet;

use podium_core::model::normalize_key;
use podium_core::{Catalog, Speaker};

/// Result of looking speakers up by theme or tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeLookup<'a> {
    /// The query was blank after trimming.
    NoInput,
    NotFound,
    /// Matching speakers, one per distinct name, in first-seen order.
    Found(Vec<&'a Speaker>),
}

/// Look speakers up by theme or tag.
///
/// An exact key hit uses that key's list. Otherwise the lists of every key
/// containing the query are concatenated in key order. The result is then
/// de-duplicated by speaker name, keeping the first occurrence.
pub fn find_by_theme<'a>(catalog: &'a Catalog, query: &str) -> ThemeLookup<'a> {
    let query = normalize_key(query);
    if query.is_empty() {
        return ThemeLookup::NoInput;
    }

    let themes = catalog.themes();
    let positions: Vec<usize> = match themes.get(&query) {
        Some(positions) if !positions.is_empty() => positions.clone(),
        _ => themes
            .iter()
            .filter(|(key, _)| key.contains(query.as_str()))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect(),
    };

    if positions.is_empty() {
        return ThemeLookup::NotFound;
    }

    let mut seen = HashSet::new();
    let speakers: Vec<&Speaker> = positions
        .into_iter()
        .filter_map(|position| catalog.speaker(position))
        .filter(|&speaker| seen.insert(speaker.listing_name()))
        .collect();

    log::debug!("Theme query '{}' matched {} speakers", query, speakers.len());
    ThemeLookup::Found(speakers)
}
