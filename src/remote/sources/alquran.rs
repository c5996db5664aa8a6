//! alquran.cloud client.
//!
//! Endpoints used:
//! - `GET /surah` for the chapter list
//! - `GET /surah/{n}?edition={edition}` for one chapter's ayahs
//! - `GET /surah/{n}/editions/{edition},{translation}` for text plus translation

use async_trait::async_trait;
use log::info;

use super::get_json;
use crate::remote::types::{
    Chapter, ChaptersEnvelope, EditionChapter, EditionsEnvelope, Verse, VersesEnvelope,
};
use crate::remote::{ApiError, ContentSource};

pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_EDITION: &str = "quran-uthmani";

pub struct AlQuranClient {
    base_url: String,
    edition: String,
    client: reqwest::Client,
}

impl AlQuranClient {
    pub fn new(base_url: Option<String>, edition: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            edition: edition.unwrap_or_else(|| DEFAULT_EDITION.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentSource for AlQuranClient {
    fn name(&self) -> &str {
        "alquran.cloud"
    }

    async fn chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        let url = format!("{}/surah", self.base_url);
        let envelope: ChaptersEnvelope = get_json(&self.client, &url, &[]).await?;
        info!("Fetched {} chapters", envelope.data.len());
        Ok(envelope.data)
    }

    async fn chapter_verses(&self, number: u32) -> Result<Vec<Verse>, ApiError> {
        let url = format!("{}/surah/{}", self.base_url, number);
        let envelope: VersesEnvelope =
            get_json(&self.client, &url, &[("edition", self.edition.clone())]).await?;
        info!(
            "Fetched chapter {} ({} ayahs, edition {})",
            number,
            envelope.data.ayahs.len(),
            self.edition
        );
        Ok(envelope.data.ayahs)
    }

    async fn chapter_with_translation(
        &self,
        number: u32,
        translation: &str,
    ) -> Result<(EditionChapter, EditionChapter), ApiError> {
        let url = format!(
            "{}/surah/{}/editions/{},{}",
            self.base_url, number, self.edition, translation
        );
        let envelope: EditionsEnvelope = get_json(&self.client, &url, &[]).await?;

        let mut editions = envelope.data.into_iter();
        match (editions.next(), editions.next()) {
            (Some(arabic), Some(translated)) => {
                info!(
                    "Fetched chapter {} with translation {} ({} ayahs)",
                    number,
                    translation,
                    arabic.ayahs.len()
                );
                Ok((arabic, translated))
            }
            _ => Err(ApiError::Parse(format!(
                "expected two editions for chapter {number}"
            ))),
        }
    }
}
