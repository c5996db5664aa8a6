//! # Quran Store
//!
//! Owns the current [`UiState`] and the remote sources. Screens call the
//! async operations here; each one runs the fetch, folds the outcome through
//! [`update`] and replaces the snapshot.
//!
//! The snapshot lives in a `tokio::sync::watch` channel: the store is the
//! single writer, screens hold receivers and re-render on change. Concurrent
//! fetches are not cancelled, the last one to finish wins.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::core::action::{Action, update};
use crate::core::adapter;
use crate::core::cache::{CacheError, SnapshotCache};
use crate::core::fallback;
use crate::core::model::QuranVerse;
use crate::core::prayer::PrayerTimes;
use crate::core::state::UiState;
use crate::remote::{Chapter, ContentSource, Coordinates, PrayerTimesSource};

/// Chapters fetched in the background after the list loads.
pub const POPULAR_CHAPTERS: [u32; 10] = [1, 2, 3, 18, 36, 55, 67, 112, 113, 114];

/// Short chapters downloaded with translation for offline use.
pub const ESSENTIAL_CHAPTERS: [u32; 7] = [1, 112, 113, 114, 110, 108, 109];

/// Knobs the store needs from configuration.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub translation_edition: String,
    pub prayer_method: u8,
    /// Pause between consecutive downloads.
    pub request_delay: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            translation_edition: "fr.hamidullah".to_string(),
            prayer_method: crate::remote::sources::aladhan::DEFAULT_METHOD,
            request_delay: Duration::from_millis(500),
        }
    }
}

/// Where startup content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    Cache,
    Bundled,
}

pub struct QuranStore {
    content: Arc<dyn ContentSource>,
    prayer: Arc<dyn PrayerTimesSource>,
    settings: StoreSettings,
    state: watch::Sender<UiState>,
}

impl QuranStore {
    pub fn new(
        content: Arc<dyn ContentSource>,
        prayer: Arc<dyn PrayerTimesSource>,
        settings: StoreSettings,
    ) -> Self {
        let (state, _) = watch::channel(UiState::default());
        Self {
            content,
            prayer,
            settings,
            state,
        }
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// A receiver that sees every future snapshot.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    fn dispatch(&self, action: Action) {
        debug!("dispatch: {}", action_name(&action));
        self.state.send_modify(|state| *state = update(state, action));
    }

    /// Fetches the chapter list and rebuilds the display records from it.
    pub async fn load_chapters(&self) {
        self.dispatch(Action::LoadStarted);
        match self.content.chapters().await {
            Ok(chapters) => {
                info!("Loaded {} chapters from {}", chapters.len(), self.content.name());
                self.dispatch(Action::ChaptersLoaded(chapters));
            }
            Err(e) => {
                warn!("Loading chapters failed: {}", e);
                self.dispatch(Action::LoadFailed(e.to_string()));
            }
        }
    }

    /// Fetches one chapter's verses and swaps them into its record.
    pub async fn load_chapter_verses(&self, number: u32) {
        self.dispatch(Action::LoadStarted);
        match self.content.chapter_verses(number).await {
            Ok(verses) => self.dispatch(Action::ChapterVersesLoaded { number, verses }),
            Err(e) => {
                warn!("Loading chapter {} failed: {}", number, e);
                self.dispatch(Action::LoadFailed(e.to_string()));
            }
        }
    }

    /// Filters already-loaded records. Never hits the network.
    pub fn search(&self, query: &str) {
        self.dispatch(Action::Search(query.to_string()));
    }

    pub fn clear_error(&self) {
        self.dispatch(Action::ClearError);
    }

    pub fn clear_search_results(&self) {
        self.dispatch(Action::ClearSearchResults);
    }

    pub async fn refresh(&self) {
        self.load_chapters().await;
    }

    pub fn chapter_by_id(&self, number: u32) -> Option<Chapter> {
        self.state.borrow().chapter_by_id(number).cloned()
    }

    pub fn verse_by_id(&self, id: u32) -> Option<QuranVerse> {
        self.state.borrow().verse_by_id(id).cloned()
    }

    /// Loads [`POPULAR_CHAPTERS`] one after another. Failures are skipped.
    pub async fn preload_popular_chapters(&self) {
        for number in POPULAR_CHAPTERS {
            match self.content.chapter_verses(number).await {
                Ok(verses) => self.dispatch(Action::ChapterPreloaded { number, verses }),
                Err(e) => debug!("Preload of chapter {} skipped: {}", number, e),
            }
        }
    }

    /// Downloads [`ESSENTIAL_CHAPTERS`] with translation, saves them to
    /// `cache` and merges them into the display list.
    ///
    /// `progress` receives a human-readable line before each request.
    /// Chapters that fail are left out. Returns what was downloaded.
    pub async fn download_essentials(
        &self,
        cache: &SnapshotCache,
        mut progress: impl FnMut(&str),
    ) -> Vec<QuranVerse> {
        self.dispatch(Action::LoadStarted);
        let translation = self.settings.translation_edition.clone();
        let mut downloaded = Vec::new();

        for (i, number) in ESSENTIAL_CHAPTERS.into_iter().enumerate() {
            if i > 0 && !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }
            progress(&format!("Downloading chapter {number}..."));
            match self.content.chapter_with_translation(number, &translation).await {
                Ok((arabic, translated)) => {
                    downloaded.push(adapter::edition_pair_to_record(&arabic, &translated));
                }
                Err(e) => warn!("Download of chapter {} failed: {}", number, e),
            }
        }

        if downloaded.is_empty() {
            self.dispatch(Action::LoadFailed(
                "no chapter could be downloaded".to_string(),
            ));
            return downloaded;
        }

        if let Err(e) = cache.save(&downloaded) {
            warn!("Failed to save downloaded chapters: {}", e);
        }
        info!("Downloaded {} essential chapters", downloaded.len());
        self.dispatch(Action::RecordsMerged(downloaded.clone()));
        downloaded
    }

    /// Puts startup content in place: the cache snapshot when there is one,
    /// otherwise the bundled asset.
    pub fn restore(&self, cache: &SnapshotCache) -> RestoreSource {
        let (records, source) = if cache.has_snapshot() {
            (cache.load(), RestoreSource::Cache)
        } else {
            (fallback::bundled(), RestoreSource::Bundled)
        };
        info!("Restored {} records from {:?}", records.len(), source);
        self.dispatch(Action::SnapshotRestored(records));
        source
    }

    /// Saves every record that carries verses. Returns how many were written.
    pub fn persist(&self, cache: &SnapshotCache) -> Result<usize, CacheError> {
        let records: Vec<QuranVerse> = self
            .state
            .borrow()
            .verses
            .iter()
            .filter(|v| v.has_verses())
            .cloned()
            .collect();
        cache.save(&records)?;
        Ok(records.len())
    }

    pub async fn load_prayer_times(&self, at: Coordinates) {
        self.dispatch(Action::LoadStarted);
        let result = self
            .prayer
            .timings(at, self.settings.prayer_method)
            .await
            .map_err(|e| e.to_string())
            .and_then(|t| PrayerTimes::from_timings(&t));
        match result {
            Ok(times) => self.dispatch(Action::PrayerTimesLoaded(times)),
            Err(message) => {
                warn!("Loading prayer times from {} failed: {}", self.prayer.name(), message);
                self.dispatch(Action::LoadFailed(message));
            }
        }
    }
}

/// Variant name only; payloads can be whole chapters.
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::LoadStarted => "LoadStarted",
        Action::LoadFailed(_) => "LoadFailed",
        Action::ChaptersLoaded(_) => "ChaptersLoaded",
        Action::ChapterVersesLoaded { .. } => "ChapterVersesLoaded",
        Action::ChapterPreloaded { .. } => "ChapterPreloaded",
        Action::RecordsMerged(_) => "RecordsMerged",
        Action::SnapshotRestored(_) => "SnapshotRestored",
        Action::PrayerTimesLoaded(_) => "PrayerTimesLoaded",
        Action::Search(_) => "Search",
        Action::ClearError => "ClearError",
        Action::ClearSearchResults => "ClearSearchResults",
    }
}
