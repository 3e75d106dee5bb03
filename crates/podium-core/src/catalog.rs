use std::path::Path;

use crate::error::Result;
use crate::index::{self, NameIndex, ThemeIndex};
use crate::model::Speaker;
use crate::store;

/// A loaded speaker collection together with its lookup indexes.
///
/// Built once at startup and read-only afterwards; every search and
/// display operation borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    speakers: Vec<Speaker>,
    names: NameIndex,
    themes: ThemeIndex,
}

impl Catalog {
    pub fn new(speakers: Vec<Speaker>) -> Self {
        let (names, themes) = index::build(&speakers);
        Self {
            speakers,
            names,
            themes,
        }
    }

    /// Load a data file and index it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`store::load`].
    pub fn load(path: &Path) -> Result<Self> {
        store::load(path).map(Self::new)
    }

    /// Speakers in load order.
    pub fn speakers(&self) -> &[Speaker] {
        &self.speakers
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    pub fn themes(&self) -> &ThemeIndex {
        &self.themes
    }

    /// Resolve an index position to its speaker.
    pub fn speaker(&self, position: usize) -> Option<&Speaker> {
        self.speakers.get(position)
    }

    /// Theme and tag keys, sorted alphabetically.
    pub fn sorted_themes(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.themes.keys().collect();
        keys.sort_unstable();
        keys
    }
}
