//! Content compiled into the binary, shown when there is neither a cache
//! nor a network answer.

use log::warn;

use crate::core::model::QuranVerse;

const BUNDLED_JSON: &str = include_str!("../../assets/fallback.json");

/// Parses the bundled asset. A broken asset yields an empty list.
pub fn bundled() -> Vec<QuranVerse> {
    parse(BUNDLED_JSON)
}

fn parse(json: &str) -> Vec<QuranVerse> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        warn!("Bundled fallback content is malformed: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let records = bundled();
        assert!(!records.is_empty());
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].verses.len(), 7);
    }

    #[test]
    fn test_bundled_verses_are_ascending() {
        for record in bundled() {
            let numbers: Vec<u32> = record.verses.iter().map(|v| v.number).collect();
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            assert_eq!(numbers, sorted, "record {} out of order", record.id);
        }
    }

    #[test]
    fn test_malformed_asset_is_empty() {
        assert!(parse("{not json").is_empty());
    }
}
