use std::fmt::Write;

use super::pad;
use crate::core::reminders::{
    DHIKR_LIST, DUAS, DhikrCounter, DhikrSequence, ReminderCard, VERSES_AND_HADITHS,
};

pub fn reminders() -> String {
    let mut out = String::from("Dhikr\n");
    for dhikr in DHIKR_LIST {
        let _ = writeln!(
            out,
            "  {} {}  x{}",
            pad(dhikr.name, 14),
            dhikr.arabic,
            dhikr.target
        );
    }

    let sequence = DhikrSequence::default();
    let _ = writeln!(
        out,
        "\nAfter prayer\n  {}, {} each (siraj dhikr)",
        sequence.phrases().join(", "),
        sequence.target()
    );

    out.push_str("\nDuas\n");
    cards(&mut out, &DUAS);
    out.push_str("\nVerses & Hadiths\n");
    cards(&mut out, &VERSES_AND_HADITHS);
    out
}

/// One line for the free counter.
pub fn dhikr_counter(counter: &DhikrCounter) -> String {
    let dhikr = counter.dhikr();
    let done = if counter.target_reached() { "  done" } else { "" };
    format!(
        "{} {}  {}/{}{}\n",
        dhikr.name,
        dhikr.arabic,
        counter.count(),
        dhikr.target,
        done
    )
}

/// One line for the after-prayer sequence.
pub fn dhikr_sequence(sequence: &DhikrSequence) -> String {
    match sequence.current() {
        Some(phrase) => format!(
            "[{}/{}] {}  {}/{}\n",
            sequence.step() + 1,
            sequence.phrases().len(),
            phrase,
            sequence.count(),
            sequence.target()
        ),
        None => "Sequence complete.\n".to_string(),
    }
}

fn cards(out: &mut String, cards: &[ReminderCard]) {
    for card in cards {
        let _ = writeln!(out, "  {}\n    {}", card.arabic, card.translation);
    }
}
