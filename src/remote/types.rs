//! Wire types for the alquran.cloud and aladhan.com REST APIs.
//!
//! These mirror the JSON the servers send. Unknown fields are ignored by
//! serde, so only what the app reads is declared here.

use serde::{Deserialize, Serialize};

/// A sura as listed by `GET /surah`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_ayahs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revelation_type: Option<String>,
}

/// A single ayah. `number` is the global index across the whole Quran,
/// `number_in_surah` the position inside its chapter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub number: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_in_surah: Option<u32>,
}

/// A chapter together with its ayahs in one edition.
#[derive(Deserialize, Debug, Clone)]
pub struct EditionChapter {
    #[serde(flatten)]
    pub chapter: Chapter,
    pub ayahs: Vec<Verse>,
}

/// `{ "data": [ Chapter, ... ] }`
#[derive(Deserialize, Debug)]
pub struct ChaptersEnvelope {
    pub data: Vec<Chapter>,
}

/// `{ "data": { "ayahs": [ Verse, ... ] } }`
#[derive(Deserialize, Debug)]
pub struct VersesEnvelope {
    pub data: VersesData,
}

#[derive(Deserialize, Debug)]
pub struct VersesData {
    pub ayahs: Vec<Verse>,
}

/// `{ "data": [ EditionChapter, EditionChapter ] }`, one entry per requested edition.
#[derive(Deserialize, Debug)]
pub struct EditionsEnvelope {
    pub data: Vec<EditionChapter>,
}

/// Raw prayer timings, `HH:MM` strings as sent by aladhan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Timings {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// `{ "data": { "timings": { ... } } }`
#[derive(Deserialize, Debug)]
pub struct TimingsEnvelope {
    pub data: TimingsData,
}

#[derive(Deserialize, Debug)]
pub struct TimingsData {
    pub timings: Timings,
}

/// Where to compute prayer times for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
