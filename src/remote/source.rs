use std::fmt;

use async_trait::async_trait;

use super::types::{Chapter, Coordinates, EditionChapter, Timings, Verse};

/// Errors that can occur while talking to a remote API.
/// The store shows these to the user through their `Display` text.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, timeout).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Quran text provider.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Lists every chapter.
    async fn chapters(&self) -> Result<Vec<Chapter>, ApiError>;

    /// Fetches the ayahs of one chapter in the primary (Arabic) edition.
    async fn chapter_verses(&self, number: u32) -> Result<Vec<Verse>, ApiError>;

    /// Fetches one chapter in the primary edition and in `translation`.
    /// Returns `(arabic, translation)`.
    async fn chapter_with_translation(
        &self,
        number: u32,
        translation: &str,
    ) -> Result<(EditionChapter, EditionChapter), ApiError>;
}

/// Prayer-times provider.
#[async_trait]
pub trait PrayerTimesSource: Send + Sync {
    fn name(&self) -> &str;

    /// Today's timings at `at`, computed with calculation `method`.
    async fn timings(&self, at: Coordinates, method: u8) -> Result<Timings, ApiError>;
}
