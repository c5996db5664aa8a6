//! # Actions
//!
//! Everything that can happen to the state becomes an `Action`.
//! A fetch starts? That's `Action::LoadStarted`.
//! The chapter list arrives? That's `Action::ChaptersLoaded(chapters)`.
//!
//! `update()` takes the current snapshot and an action and returns the next
//! snapshot. No side effects here. I/O happens in the store.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```

use crate::core::adapter;
use crate::core::model::QuranVerse;
use crate::core::prayer::PrayerTimes;
use crate::core::state::UiState;
use crate::remote::{Chapter, Verse};

#[derive(Debug, Clone)]
pub enum Action {
    /// A fetch began: loading on, previous error dropped.
    LoadStarted,
    /// A fetch failed. Content is left as it was.
    LoadFailed(String),
    ChaptersLoaded(Vec<Chapter>),
    /// The user opened chapter `number`.
    ChapterVersesLoaded { number: u32, verses: Vec<Verse> },
    /// Background preload of chapter `number`; leaves loading/current alone.
    ChapterPreloaded { number: u32, verses: Vec<Verse> },
    /// Ready-made records (downloads): replace by id, append the rest.
    RecordsMerged(Vec<QuranVerse>),
    /// Startup content from cache or bundled asset.
    SnapshotRestored(Vec<QuranVerse>),
    PrayerTimesLoaded(PrayerTimes),
    Search(String),
    ClearError,
    ClearSearchResults,
}

/// Computes the next snapshot.
pub fn update(state: &UiState, action: Action) -> UiState {
    let mut next = state.clone();
    match action {
        Action::LoadStarted => {
            next.is_loading = true;
            next.error = None;
        }
        Action::LoadFailed(message) => {
            next.is_loading = false;
            next.error = Some(message);
        }
        Action::ChaptersLoaded(chapters) => {
            next.verses = merge_chapter_list(&state.verses, &chapters);
            next.chapters = chapters;
            next.is_loading = false;
        }
        Action::ChapterVersesLoaded { number, verses } => {
            let chapter = state.chapter_by_id(number).cloned();
            let record = fetched_record(state, number, &verses, chapter.as_ref());
            replace_by_id(&mut next.verses, number, record);
            next.current_chapter = chapter;
            next.current_verses = verses;
            next.is_loading = false;
        }
        Action::ChapterPreloaded { number, verses } => {
            let record = fetched_record(state, number, &verses, state.chapter_by_id(number));
            replace_by_id(&mut next.verses, number, record);
        }
        Action::RecordsMerged(records) => {
            for record in records {
                match next.verses.iter_mut().find(|v| v.id == record.id) {
                    Some(slot) => *slot = record,
                    None => next.verses.push(record),
                }
            }
            next.is_loading = false;
        }
        Action::SnapshotRestored(records) => {
            next.verses = records;
        }
        Action::PrayerTimesLoaded(times) => {
            next.prayer_times = Some(times);
            next.is_loading = false;
        }
        Action::Search(query) => {
            next.search_results = search(&state.verses, &query);
        }
        Action::ClearError => {
            next.error = None;
        }
        Action::ClearSearchResults => {
            next.search_results.clear();
        }
    }
    next
}

/// Records matching `query` case-insensitively, in list order.
/// A blank query matches nothing.
pub fn search(records: &[QuranVerse], query: &str) -> Vec<QuranVerse> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| r.matches(&needle))
        .cloned()
        .collect()
}

/// Record for freshly fetched ayahs of chapter `number`.
///
/// The id is always `number`. Without chapter info the heading of the record
/// already held for `number` is kept. Translations already held for the same
/// ayah numbers are carried over when the fetch brings none.
fn fetched_record(
    state: &UiState,
    number: u32,
    verses: &[Verse],
    chapter: Option<&Chapter>,
) -> QuranVerse {
    let mut record = adapter::verses_to_record(verses, chapter);
    record.id = number;
    let Some(old) = state.verse_by_id(number) else {
        return record;
    };

    if chapter.is_none() {
        record.title = old.title.clone();
        record.text = old.text.clone();
        record.arabic_text = old.arabic_text.clone();
        record.translation = old.translation.clone();
    }
    if record.audio.is_empty() {
        record.audio = old.audio.clone();
    }
    for verset in &mut record.verses {
        let Some(held) = old.verses.iter().find(|v| v.number == verset.number) else {
            continue;
        };
        if verset.translation.is_empty() {
            verset.translation = held.translation.clone();
        }
        if verset.transliteration.is_empty() {
            verset.transliteration = held.transliteration.clone();
        }
    }
    record
}

/// Swaps in `record` where an entry with `id` exists. Unknown ids are dropped.
fn replace_by_id(records: &mut [QuranVerse], id: u32, record: QuranVerse) {
    if let Some(slot) = records.iter_mut().find(|v| v.id == id) {
        *slot = record;
    }
}

/// One record per chapter, keeping any already-loaded verses for it.
fn merge_chapter_list(existing: &[QuranVerse], chapters: &[Chapter]) -> Vec<QuranVerse> {
    adapter::chapters_to_records(chapters)
        .into_iter()
        .map(|fresh| {
            match existing.iter().find(|old| old.id == fresh.id && old.has_verses()) {
                Some(old) => old.clone(),
                None => fresh,
            }
        })
        .collect()
}
