use podium_core::model::normalize_key;
use podium_core::{Catalog, Speaker};

/// Result of looking a speaker up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup<'a> {
    /// The query was blank after trimming.
    NoInput,
    NotFound,
    Found(&'a Speaker),
    /// More than one name contains the query; the caller has to pick.
    Ambiguous(Candidates<'a>),
}

/// Speakers whose names partially matched a query, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<'a> {
    speakers: Vec<&'a Speaker>,
}

/// Result of choosing among [`Candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Chosen(&'a Speaker),
    /// The pick was blank.
    Cancelled,
    /// The pick was not a number, or not a valid 1-based position.
    Invalid,
}

impl<'a> Candidates<'a> {
    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Speaker> + '_ {
        self.speakers.iter().copied()
    }

    /// Resolve a user's 1-based pick.
    pub fn select(&self, pick: &str) -> Selection<'a> {
        let pick = pick.trim();
        if pick.is_empty() {
            return Selection::Cancelled;
        }

        match pick.parse::<usize>() {
            Ok(number) if number >= 1 => self
                .speakers
                .get(number - 1)
                .map_or(Selection::Invalid, |&speaker| Selection::Chosen(speaker)),
            _ => Selection::Invalid,
        }
    }
}

/// Look a speaker up by name.
///
/// An exact key hit wins outright. Otherwise every name containing the
/// query is collected: one match is returned directly, several come back
/// as [`NameLookup::Ambiguous`].
pub fn find_by_name<'a>(catalog: &'a Catalog, query: &str) -> NameLookup<'a> {
    let query = normalize_key(query);
    if query.is_empty() {
        return NameLookup::NoInput;
    }

    if let Some(speaker) = catalog
        .names()
        .get(&query)
        .and_then(|&position| catalog.speaker(position))
    {
        return NameLookup::Found(speaker);
    }

    let mut speakers: Vec<&Speaker> = catalog
        .names()
        .iter()
        .filter(|(key, _)| key.contains(query.as_str()))
        .filter_map(|(_, &position)| catalog.speaker(position))
        .collect();

    log::debug!("Name query '{}' matched {} keys", query, speakers.len());

    match speakers.len() {
        0 => NameLookup::NotFound,
        1 => NameLookup::Found(speakers.remove(0)),
        _ => NameLookup::Ambiguous(Candidates { speakers }),
    }
}
