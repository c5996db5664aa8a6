//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::store::{QuranStore, StoreSettings};
use crate::remote::{
    ApiError, Chapter, ContentSource, Coordinates, EditionChapter, PrayerTimesSource, Timings,
    Verse,
};

pub fn test_chapter(number: u32, english_name: &str, translation: &str) -> Chapter {
    Chapter {
        number,
        name: format!("سورة {number}"),
        english_name: english_name.to_string(),
        english_name_translation: translation.to_string(),
        number_of_ayahs: None,
        revelation_type: None,
    }
}

pub fn test_chapters() -> Vec<Chapter> {
    vec![
        test_chapter(1, "Al-Faatiha", "The Opening"),
        test_chapter(2, "Al-Baqara", "The Cow"),
        test_chapter(112, "Al-Ikhlaas", "Sincerity"),
        test_chapter(113, "Al-Falaq", "The Dawn"),
        test_chapter(114, "An-Naas", "Mankind"),
    ]
}

/// Ayahs `1..=count` of a chapter, with in-chapter numbering.
pub fn test_verses(chapter: u32, count: u32) -> Vec<Verse> {
    (1..=count)
        .map(|n| Verse {
            number: chapter * 1000 + n,
            text: format!("آية {n}"),
            number_in_surah: Some(n),
        })
        .collect()
}

/// In-memory content source. Chapter 112 has four ayahs, every other
/// chapter three. `fail_with` makes every later call fail.
#[derive(Default)]
pub struct StubContent {
    failure: Mutex<Option<String>>,
}

impl StubContent {
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(ApiError::Parse(message.clone())),
            None => Ok(()),
        }
    }

    fn chapter(number: u32) -> Chapter {
        test_chapters()
            .into_iter()
            .find(|c| c.number == number)
            .unwrap_or_else(|| test_chapter(number, &format!("Chapter-{number}"), "Unknown"))
    }
}

#[async_trait]
impl ContentSource for StubContent {
    fn name(&self) -> &str {
        "stub"
    }

    async fn chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        self.check()?;
        Ok(test_chapters())
    }

    async fn chapter_verses(&self, number: u32) -> Result<Vec<Verse>, ApiError> {
        self.check()?;
        Ok(test_verses(number, if number == 112 { 4 } else { 3 }))
    }

    async fn chapter_with_translation(
        &self,
        number: u32,
        _translation: &str,
    ) -> Result<(EditionChapter, EditionChapter), ApiError> {
        self.check()?;
        let ayahs = test_verses(number, 3);
        let translated = ayahs
            .iter()
            .map(|v| Verse {
                text: format!("Verse {}", v.number_in_surah.unwrap_or(v.number)),
                ..v.clone()
            })
            .collect();
        Ok((
            EditionChapter {
                chapter: Self::chapter(number),
                ayahs,
            },
            EditionChapter {
                chapter: Self::chapter(number),
                ayahs: translated,
            },
        ))
    }
}

/// Returns fixed timings; `with_fajr` swaps in a custom Fajr value.
pub struct StubPrayer {
    timings: Timings,
}

impl Default for StubPrayer {
    fn default() -> Self {
        Self {
            timings: Timings {
                fajr: "05:12".into(),
                dhuhr: "12:30".into(),
                asr: "15:45".into(),
                maghrib: "18:20".into(),
                isha: "19:50".into(),
            },
        }
    }
}

impl StubPrayer {
    pub fn with_fajr(value: &str) -> Self {
        let mut stub = Self::default();
        stub.timings.fajr = value.to_string();
        stub
    }
}

#[async_trait]
impl PrayerTimesSource for StubPrayer {
    fn name(&self) -> &str {
        "stub"
    }

    async fn timings(&self, _at: Coordinates, _method: u8) -> Result<Timings, ApiError> {
        Ok(self.timings.clone())
    }
}

/// A store over `content` and a default `StubPrayer`, with no download delay.
pub fn test_store(content: Arc<StubContent>) -> QuranStore {
    QuranStore::new(
        content,
        Arc::new(StubPrayer::default()),
        StoreSettings {
            request_delay: Duration::ZERO,
            ..Default::default()
        },
    )
}
