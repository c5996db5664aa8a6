//! # Application State
//!
//! One immutable snapshot of everything the screens show.
//!
//! ```text
//! UiState
//! ├── chapters: Vec<Chapter>            // wire chapter list
//! ├── verses: Vec<QuranVerse>           // display records
//! ├── current_chapter: Option<Chapter>  // last chapter opened
//! ├── current_verses: Vec<Verse>        // its raw ayahs
//! ├── is_loading: bool                  // fetch in flight
//! ├── error: Option<String>             // last failure, shown as-is
//! ├── search_results: Vec<QuranVerse>   // matches over loaded records
//! └── prayer_times: Option<PrayerTimes> // today's timings
//! ```
//!
//! Snapshots are never edited in place by callers. The store replaces the
//! whole value through `update(state, action)` in action.rs.

use crate::core::model::QuranVerse;
use crate::core::prayer::PrayerTimes;
use crate::remote::{Chapter, Verse};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub chapters: Vec<Chapter>,
    pub verses: Vec<QuranVerse>,
    pub current_chapter: Option<Chapter>,
    pub current_verses: Vec<Verse>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_results: Vec<QuranVerse>,
    pub prayer_times: Option<PrayerTimes>,
}

impl UiState {
    pub fn chapter_by_id(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    pub fn verse_by_id(&self, id: u32) -> Option<&QuranVerse> {
        self.verses.iter().find(|v| v.id == id)
    }
}
