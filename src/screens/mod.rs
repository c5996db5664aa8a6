//! # Screens
//!
//! Plain-text views over core state. Each function takes a snapshot (or a
//! piece of one) and returns the text to print; none of them mutate state.
//! User intents go back through `QuranStore` in main.rs.

mod prayer;
mod quran;
mod reminders;

pub use prayer::prayer_times;
pub use quran::{chapter_list, home, reading, search_results};
pub use reminders::{dhikr_counter, dhikr_sequence, reminders};

use unicode_width::UnicodeWidthStr;

/// Terminal width used when the caller has no better idea.
pub const DEFAULT_WIDTH: usize = 80;

/// Error banner with the two actions the user has.
pub fn error_banner(message: &str) -> String {
    format!("Error: {message}\n  retry: run the command again\n  dismiss: ignore this message")
}

/// Pads `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}
