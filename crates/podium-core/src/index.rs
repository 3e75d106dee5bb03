//! Name and theme/tag lookup indexes.
//!
//! Both indexes map a normalised key (trimmed, lower-cased) to positions in
//! the loaded speaker list. Keys keep the order in which they were first
//! inserted, which is the order partial matches are reported in.

use std::collections::HashMap;

use crate::model::Speaker;

/// An insertion-ordered map from normalised keys to values.
///
/// Re-inserting an existing key replaces its value but keeps the key in its
/// original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedIndex<V> {
    keys: Vec<String>,
    values: Vec<V>,
    positions: HashMap<String, usize>,
}

impl<V> Default for KeyedIndex<V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> KeyedIndex<V> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Exact lookup by an already-normalised key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.positions.get(key).map(|&slot| &self.values[slot])
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Entries in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.keys.iter().map(String::as_str).zip(self.values.iter())
    }

    fn insert(&mut self, key: String, value: V) {
        if let Some(&slot) = self.positions.get(&key) {
            self.values[slot] = value;
        } else {
            self.positions.insert(key.clone(), self.keys.len());
            self.keys.push(key);
            self.values.push(value);
        }
    }
}

impl<V: Default> KeyedIndex<V> {
    fn entry(&mut self, key: String) -> &mut V {
        let slot = if let Some(&slot) = self.positions.get(&key) {
            slot
        } else {
            let slot = self.keys.len();
            self.positions.insert(key.clone(), slot);
            self.keys.push(key);
            self.values.push(V::default());
            slot
        };
        &mut self.values[slot]
    }
}

/// Lower-cased name → position of the last speaker carrying that name.
pub type NameIndex = KeyedIndex<usize>;

/// Lower-cased theme or tag → positions of every speaker filed under it.
///
/// A speaker appears once under its theme and once under each tag, so the
/// same position can occur more than once in a single list.
pub type ThemeIndex = KeyedIndex<Vec<usize>>;

/// Build both indexes from a loaded speaker list.
pub fn build(speakers: &[Speaker]) -> (NameIndex, ThemeIndex) {
    let mut names = NameIndex::default();
    let mut themes = ThemeIndex::default();

    for (position, speaker) in speakers.iter().enumerate() {
        if let Some(key) = speaker.name_key() {
            names.insert(key, position);
        }

        if let Some(key) = speaker.theme_key() {
            themes.entry(key).push(position);
        }

        for key in speaker.tag_keys() {
            themes.entry(key).push(position);
        }
    }

    log::debug!(
        "Indexed {} names and {} themes/tags",
        names.len(),
        themes.len()
    );
    (names, themes)
}
