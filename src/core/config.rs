//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.siraj/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::cache::{DEFAULT_FILE_NAME, DEFAULT_MIN_BYTES};
use crate::core::store::StoreSettings;
use crate::remote::Coordinates;
use crate::remote::sources::{aladhan, alquran};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SirajConfig {
    #[serde(default)]
    pub quran: QuranConfig,
    #[serde(default)]
    pub prayer: PrayerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuranConfig {
    pub base_url: Option<String>,
    pub edition: Option<String>,
    pub translation_edition: Option<String>,
    pub request_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PrayerConfig {
    pub base_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub method: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    pub dir: Option<String>,
    pub file_name: Option<String>,
    pub min_bytes: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSLATION_EDITION: &str = "fr.hamidullah";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub quran_base_url: String,
    pub edition: String,
    pub translation_edition: String,
    pub request_delay: Duration,
    pub prayer_base_url: String,
    /// `None` until both latitude and longitude are known.
    pub location: Option<Coordinates>,
    pub prayer_method: u8,
    pub cache_path: PathBuf,
    pub cache_min_bytes: u64,
}

impl ResolvedConfig {
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            translation_edition: self.translation_edition.clone(),
            prayer_method: self.prayer_method,
            request_delay: self.request_delay,
        }
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub method: Option<u8>,
    pub translation_edition: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.siraj/`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".siraj"))
}

/// Returns the path to `~/.siraj/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.siraj/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SirajConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SirajConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SirajConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SirajConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SirajConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SirajConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Siraj Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [quran]
# base_url = "https://api.alquran.cloud/v1"   # Or set SIRAJ_QURAN_BASE_URL
# edition = "quran-uthmani"
# translation_edition = "fr.hamidullah"
# request_delay_ms = 500                      # Pause between downloads

# [prayer]
# base_url = "https://api.aladhan.com/v1"     # Or set SIRAJ_PRAYER_BASE_URL
# latitude = 48.8566                          # Or set SIRAJ_LATITUDE
# longitude = 2.3522                          # Or set SIRAJ_LONGITUDE
# method = 2                                  # aladhan calculation method

# [cache]
# dir = "/home/me/.siraj"                     # Or set SIRAJ_CACHE_DIR
# file_name = "essential_sourates.json"
# min_bytes = 1000                            # Smaller files count as no cache
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SirajConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &SirajConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env_f64 = |key: &str| env(key).and_then(|v| v.parse::<f64>().ok());

    // Base URLs: env → config → default
    let quran_base_url = env("SIRAJ_QURAN_BASE_URL")
        .or_else(|| config.quran.base_url.clone())
        .unwrap_or_else(|| alquran::DEFAULT_BASE_URL.to_string());

    let prayer_base_url = env("SIRAJ_PRAYER_BASE_URL")
        .or_else(|| config.prayer.base_url.clone())
        .unwrap_or_else(|| aladhan::DEFAULT_BASE_URL.to_string());

    // Translation: CLI → env → config → default
    let translation_edition = cli
        .translation_edition
        .clone()
        .or_else(|| env("SIRAJ_TRANSLATION"))
        .or_else(|| config.quran.translation_edition.clone())
        .unwrap_or_else(|| DEFAULT_TRANSLATION_EDITION.to_string());

    // Location: CLI → env → config, per coordinate
    let latitude = cli
        .latitude
        .or_else(|| env_f64("SIRAJ_LATITUDE"))
        .or(config.prayer.latitude);
    let longitude = cli
        .longitude
        .or_else(|| env_f64("SIRAJ_LONGITUDE"))
        .or(config.prayer.longitude);
    let location = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };

    // Cache: env → config → ~/.siraj → current directory
    let cache_dir = env("SIRAJ_CACHE_DIR")
        .or_else(|| config.cache.dir.clone())
        .map(PathBuf::from)
        .or_else(data_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let cache_path = cache_dir.join(
        config
            .cache
            .file_name
            .as_deref()
            .unwrap_or(DEFAULT_FILE_NAME),
    );

    ResolvedConfig {
        quran_base_url,
        edition: config
            .quran
            .edition
            .clone()
            .unwrap_or_else(|| alquran::DEFAULT_EDITION.to_string()),
        translation_edition,
        request_delay: Duration::from_millis(
            config
                .quran
                .request_delay_ms
                .unwrap_or(DEFAULT_REQUEST_DELAY_MS),
        ),
        prayer_base_url,
        location,
        prayer_method: cli
            .method
            .or(config.prayer.method)
            .unwrap_or(aladhan::DEFAULT_METHOD),
        cache_path,
        cache_min_bytes: config.cache.min_bytes.unwrap_or(DEFAULT_MIN_BYTES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = SirajConfig::default();
        assert!(config.quran.base_url.is_none());
        assert!(config.prayer.latitude.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&SirajConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.quran_base_url, alquran::DEFAULT_BASE_URL);
        assert_eq!(resolved.prayer_base_url, aladhan::DEFAULT_BASE_URL);
        assert_eq!(resolved.edition, "quran-uthmani");
        assert_eq!(resolved.translation_edition, DEFAULT_TRANSLATION_EDITION);
        assert_eq!(resolved.prayer_method, 2);
        assert_eq!(resolved.cache_min_bytes, DEFAULT_MIN_BYTES);
        assert_eq!(resolved.request_delay, Duration::from_millis(500));
        assert!(resolved.location.is_none());
        assert!(resolved.cache_path.ends_with(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SirajConfig {
            quran: QuranConfig {
                base_url: Some("http://localhost:9000".into()),
                edition: Some("quran-simple".into()),
                translation_edition: Some("en.sahih".into()),
                request_delay_ms: Some(0),
            },
            prayer: PrayerConfig {
                base_url: None,
                latitude: Some(21.42),
                longitude: Some(39.83),
                method: Some(4),
            },
            cache: CacheConfig {
                dir: Some("/tmp/siraj".into()),
                file_name: Some("cache.json".into()),
                min_bytes: Some(10),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.quran_base_url, "http://localhost:9000");
        assert_eq!(resolved.edition, "quran-simple");
        assert_eq!(resolved.translation_edition, "en.sahih");
        assert_eq!(resolved.request_delay, Duration::ZERO);
        assert_eq!(resolved.prayer_method, 4);
        assert_eq!(
            resolved.location,
            Some(Coordinates {
                latitude: 21.42,
                longitude: 39.83
            })
        );
        assert_eq!(resolved.cache_path, PathBuf::from("/tmp/siraj/cache.json"));
        assert_eq!(resolved.cache_min_bytes, 10);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = SirajConfig {
            quran: QuranConfig {
                translation_edition: Some("en.sahih".into()),
                ..Default::default()
            },
            prayer: PrayerConfig {
                latitude: Some(1.0),
                longitude: Some(2.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "SIRAJ_TRANSLATION" => Some("de.aburida".to_string()),
            "SIRAJ_LATITUDE" => Some("10.5".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.translation_edition, "de.aburida");
        assert_eq!(resolved.location.map(|c| c.latitude), Some(10.5));
        assert_eq!(resolved.location.map(|c| c.longitude), Some(2.0));

        let cli = CliOverrides {
            latitude: Some(-33.9),
            translation_edition: Some("fr.hamidullah".into()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.translation_edition, "fr.hamidullah");
        assert_eq!(resolved.location.map(|c| c.latitude), Some(-33.9));
    }

    #[test]
    fn test_half_a_location_is_no_location() {
        let cli = CliOverrides {
            latitude: Some(48.0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&SirajConfig::default(), &cli, no_env);
        assert!(resolved.location.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[prayer]
latitude = 48.8566
"#;
        let config: SirajConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.prayer.latitude, Some(48.8566));
        assert!(config.prayer.longitude.is_none());
        assert!(config.quran.edition.is_none());
        assert!(config.cache.min_bytes.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siraj").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.quran.base_url.is_none());
        assert!(path.exists());

        // The generated file is all comments and parses back to defaults.
        let again = load_config_from(&path).unwrap();
        assert!(again.prayer.latitude.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[quran\nedition = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_store_settings_from_resolved() {
        let resolved = resolve_with_env(&SirajConfig::default(), &CliOverrides::default(), no_env);
        let settings = resolved.store_settings();
        assert_eq!(settings.translation_edition, DEFAULT_TRANSLATION_EDITION);
        assert_eq!(settings.prayer_method, 2);
    }
}
