use serde::{Deserialize, Deserializer, Serialize};

/// Shown in listings when a record has no name.
pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_SPEAKER: &str = "Unknown speaker";
pub const UNTITLED_TALK: &str = "Untitled talk";
pub const UNKNOWN_THEME: &str = "Unknown theme";
pub const NO_SUMMARY: &str = "No summary available.";

/// A single speaker/presentation entry as it appears in the data file.
///
/// Every field is optional. Display accessors fall back to fixed
/// placeholder text so rendering code never has to deal with missing
/// values itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Primary theme of the talk.
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    /// Additional free-text categories. `null` entries are dropped on load.
    #[serde(default, deserialize_with = "non_null_tags")]
    pub tags: Vec<String>,
}

impl Speaker {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Name index key: trimmed and lower-cased, `None` when blank.
    pub fn name_key(&self) -> Option<String> {
        self.name.as_deref().and_then(non_blank_key)
    }

    /// Theme index key for the primary theme, `None` when blank.
    pub fn theme_key(&self) -> Option<String> {
        self.theme.as_deref().and_then(non_blank_key)
    }

    /// Theme index keys for every non-blank tag, in declaration order.
    pub fn tag_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.tags.iter().filter_map(|tag| non_blank_key(tag))
    }

    /// Raw name used in listings and for de-duplicating theme results.
    pub fn listing_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_SPEAKER)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_TALK)
    }

    pub fn display_theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(UNKNOWN_THEME)
    }

    pub fn display_summary(&self) -> &str {
        self.summary.as_deref().unwrap_or(NO_SUMMARY)
    }
}

/// Normalise free text into an index key: trim, then lower-case.
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

fn non_blank_key(text: &str) -> Option<String> {
    let key = normalize_key(text);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

fn non_null_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default().into_iter().flatten().collect())
}
