use std::fmt::Write;

use textwrap::Options;

use super::{error_banner, pad};
use crate::core::model::QuranVerse;
use crate::core::state::UiState;

/// Landing summary: what is loaded, and the error if any.
pub fn home(state: &UiState) -> String {
    let mut out = String::from("Siraj\n");
    let with_text = state.verses.iter().filter(|v| v.has_verses()).count();
    let _ = writeln!(
        out,
        "{} chapters listed, {} available to read",
        state.verses.len(),
        with_text
    );
    if state.is_loading {
        out.push_str("Loading...\n");
    }
    if let Some(error) = &state.error {
        out.push_str(&error_banner(error));
        out.push('\n');
    }
    out
}

/// One line per record: number, title, translation of the name.
pub fn chapter_list(records: &[QuranVerse]) -> String {
    let title_width = records
        .iter()
        .map(|r| unicode_width::UnicodeWidthStr::width(r.title.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for r in records {
        let marker = if r.has_verses() { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker}{:>4}. {}  {}",
            r.id,
            pad(&r.title, title_width),
            r.translation
        );
    }
    out
}

/// A record with its verses, wrapped to `width` columns.
pub fn reading(record: &QuranVerse, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", record.title, record.text);
    if !record.translation.is_empty() {
        let _ = writeln!(out, "{}", record.translation);
    }
    out.push('\n');

    if !record.has_verses() {
        out.push_str("No verses loaded for this chapter.\n");
        return out;
    }

    for verse in &record.verses {
        let head = format!("[{}] ", verse.number);
        let indent = " ".repeat(head.len());
        let options = Options::new(width.max(20))
            .initial_indent(&head)
            .subsequent_indent(&indent);
        let _ = writeln!(out, "{}", textwrap::fill(&verse.arabic, &options));

        let options = Options::new(width.max(20))
            .initial_indent(&indent)
            .subsequent_indent(&indent);
        for extra in [&verse.transliteration, &verse.translation] {
            if !extra.is_empty() {
                let _ = writeln!(out, "{}", textwrap::fill(extra, &options));
            }
        }
    }
    out
}

/// Search hits, or a hint when there are none.
pub fn search_results(results: &[QuranVerse], query: &str) -> String {
    if query.trim().is_empty() {
        return "Type something to search the loaded chapters.\n".to_string();
    }
    if results.is_empty() {
        return format!(
            "No results for \"{query}\".\nOnly chapters already loaded are searched.\n"
        );
    }
    let mut out = format!("{} result(s) for \"{query}\"\n", results.len());
    out.push_str(&chapter_list(results));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Verset;

    fn ikhlas() -> QuranVerse {
        let mut r = QuranVerse::new(112, "Al-Ikhlas", "الإخلاص");
        r.translation = "Sincerity".into();
        r.verses.push(Verset {
            number: 1,
            arabic: "قُلْ هُوَ اللَّهُ أَحَدٌ".into(),
            translation: "Say: He is Allah, the One.".into(),
            transliteration: "Qul huwa llahu ahad".into(),
        });
        r
    }

    #[test]
    fn test_home_shows_error() {
        let state = UiState {
            verses: vec![ikhlas()],
            error: Some("offline".into()),
            ..Default::default()
        };
        let text = home(&state);
        assert!(text.contains("1 chapters listed, 1 available to read"));
        assert!(text.contains("Error: offline"));
    }

    #[test]
    fn test_chapter_list_marks_readable() {
        let text = chapter_list(&[ikhlas(), QuranVerse::new(2, "Al-Baqara", "البقرة")]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("* 112. Al-Ikhlas"));
        assert!(lines[1].starts_with("    2. Al-Baqara"));
    }

    #[test]
    fn test_reading_includes_translation_and_number() {
        let text = reading(&ikhlas(), 80);
        assert!(text.starts_with("Al-Ikhlas (الإخلاص)"));
        assert!(text.contains("[1] قُلْ"));
        assert!(text.contains("    Say: He is Allah, the One."));
    }

    #[test]
    fn test_reading_without_verses() {
        let text = reading(&QuranVerse::new(2, "Al-Baqara", "البقرة"), 80);
        assert!(text.contains("No verses loaded"));
    }

    #[test]
    fn test_search_results_empty_hint() {
        assert!(search_results(&[], "mercy").contains("No results for \"mercy\""));
        assert!(search_results(&[], " ").starts_with("Type something"));
        assert!(search_results(&[ikhlas()], "one").starts_with("1 result(s)"));
    }
}
