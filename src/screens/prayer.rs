use std::fmt::Write;

use chrono::NaiveTime;

use super::pad;
use crate::core::prayer::{Prayer, PrayerTimes};

/// Timetable with the next prayer after `now` marked.
pub fn prayer_times(times: &PrayerTimes, now: NaiveTime) -> String {
    let next = times.next_after(now).map(|(p, _)| p);
    let mut out = String::from("Prayer times\n");
    for (prayer, time) in &times.entries {
        let marker = if Some(*prayer) == next { "  <- next" } else { "" };
        let _ = writeln!(
            out,
            "  {} {}{}",
            pad(prayer.name(), 8),
            time.format("%H:%M"),
            marker
        );
    }
    if next.is_none() {
        out.push_str("  All prayers for today have passed.\n");
        if let Some(fajr) = times.get(Prayer::Fajr) {
            let _ = writeln!(out, "  Fajr tomorrow around {}", fajr.format("%H:%M"));
        }
    }
    out
}
