//! # Snapshot Cache
//!
//! Persists a small set of display records to a single JSON file
//! (`~/.siraj/essential_sourates.json` by default) so the app has content
//! to show when offline.
//!
//! Writes go through `.tmp` + `rename()`. Reads never fail loudly: a missing,
//! unreadable or corrupt file loads as an empty list.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::core::model::QuranVerse;

/// Default cache file name inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "essential_sourates.json";

/// Files smaller than this are not worth parsing.
pub const DEFAULT_MIN_BYTES: u64 = 1000;

#[derive(Debug)]
pub enum CacheError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Io(e) => write!(f, "cache I/O error: {e}"),
            CacheError::Json(e) => write!(f, "cache format error: {e}"),
        }
    }
}

impl std::error::Error for CacheError {}

pub struct SnapshotCache {
    path: PathBuf,
    min_bytes: u64,
}

impl SnapshotCache {
    pub fn new(path: impl Into<PathBuf>, min_bytes: u64) -> Self {
        Self {
            path: path.into(),
            min_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the cache with `records`.
    pub fn save(&self, records: &[QuranVerse]) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(CacheError::Io)?;
        }
        atomic_write_json(&self.path, &records)?;
        info!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reads the cache, surfacing the reason on failure.
    /// A missing file is not an error and yields an empty list.
    pub fn try_load(&self) -> Result<Vec<QuranVerse>, CacheError> {
        if !self.path.exists() {
            debug!("No cache at {}", self.path.display());
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).map_err(CacheError::Io)?;
        serde_json::from_str(&json).map_err(CacheError::Json)
    }

    /// Reads the cache; any failure loads as empty.
    pub fn load(&self) -> Vec<QuranVerse> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!("Ignoring cache {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// True when the file is longer than `min_bytes` and holds a
    /// non-empty, well-formed record list.
    pub fn has_snapshot(&self) -> bool {
        let size = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(_) => return false,
        };
        if size <= self.min_bytes {
            debug!(
                "Cache {} not above threshold ({} <= {} bytes)",
                self.path.display(),
                size,
                self.min_bytes
            );
            return false;
        }
        matches!(self.try_load(), Ok(records) if !records.is_empty())
    }

    /// Removes the cache file if present.
    pub fn clear(&self) -> Result<(), CacheError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(CacheError::Io)?;
        }
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), CacheError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string(data).map_err(CacheError::Json)?;
    fs::write(&tmp_path, json).map_err(CacheError::Io)?;
    fs::rename(&tmp_path, path).map_err(CacheError::Io)?;
    Ok(())
}
