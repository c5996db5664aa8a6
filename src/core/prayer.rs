//! Parsed prayer times for one day.

use std::fmt;

use chrono::NaiveTime;

use crate::remote::Timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five daily prayers in day order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    pub entries: Vec<(Prayer, NaiveTime)>,
}

impl PrayerTimes {
    /// Parses the API's `HH:MM` strings. Anything after the first
    /// whitespace (e.g. `"05:12 (CET)"`) is ignored.
    pub fn from_timings(timings: &Timings) -> Result<Self, String> {
        let raw = [
            (Prayer::Fajr, &timings.fajr),
            (Prayer::Dhuhr, &timings.dhuhr),
            (Prayer::Asr, &timings.asr),
            (Prayer::Maghrib, &timings.maghrib),
            (Prayer::Isha, &timings.isha),
        ];

        let entries = raw
            .into_iter()
            .map(|(prayer, value)| {
                let clock = value.split_whitespace().next().unwrap_or("");
                NaiveTime::parse_from_str(clock, "%H:%M")
                    .map(|t| (prayer, t))
                    .map_err(|e| format!("invalid {prayer} time {value:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn get(&self, prayer: Prayer) -> Option<NaiveTime> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prayer)
            .map(|(_, t)| *t)
    }

    /// The first prayer strictly after `now`, or `None` once Isha has passed.
    pub fn next_after(&self, now: NaiveTime) -> Option<(Prayer, NaiveTime)> {
        self.entries.iter().copied().find(|(_, t)| *t > now)
    }
}
