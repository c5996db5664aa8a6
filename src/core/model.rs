//! Display records: the shape the screens render and the cache persists.

use serde::{Deserialize, Serialize};

/// One chapter as shown to the user, optionally with its verses.
///
/// When `verses` is non-empty it is in ascending verse-number order,
/// which is the order the API returns them in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct QuranVerse {
    pub id: u32,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub arabic_text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub verses: Vec<Verset>,
}

impl QuranVerse {
    /// Builds a record whose Arabic text mirrors `text`.
    pub fn new(id: u32, title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id,
            title: title.into(),
            arabic_text: text.clone(),
            text,
            ..Default::default()
        }
    }

    pub fn has_verses(&self) -> bool {
        !self.verses.is_empty()
    }

    /// Case-insensitive substring match on the record's own fields and
    /// on every sub-verse. `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&self.title)
            || hit(&self.text)
            || hit(&self.translation)
            || hit(&self.transliteration)
            || self
                .verses
                .iter()
                .any(|v| hit(&v.arabic) || hit(&v.translation) || hit(&v.transliteration))
    }
}

/// A single verse inside a [`QuranVerse`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Verset {
    pub number: u32,
    pub arabic: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub transliteration: String,
}
