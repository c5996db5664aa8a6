//! # Devotional Reminders
//!
//! Static dhikr phrases, duas and reminder cards, plus the two counters the
//! app offers: a free counter for one dhikr, and the post-prayer sequence
//! (each phrase 33 times, one after another).

/// Repetitions per phrase.
pub const DEFAULT_TARGET: u32 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dhikr {
    pub name: &'static str,
    pub arabic: &'static str,
    pub target: u32,
}

/// An Arabic text with its translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderCard {
    pub arabic: &'static str,
    pub translation: &'static str,
}

pub const DHIKR_LIST: [Dhikr; 3] = [
    Dhikr {
        name: "Subhanallah",
        arabic: "سُبْحَانَ اللَّهِ",
        target: DEFAULT_TARGET,
    },
    Dhikr {
        name: "Alhamdulillah",
        arabic: "الْحَمْدُ لِلَّهِ",
        target: DEFAULT_TARGET,
    },
    Dhikr {
        name: "Allahu Akbar",
        arabic: "اللَّهُ أَكْبَرُ",
        target: DEFAULT_TARGET,
    },
];

pub const DUAS: [ReminderCard; 2] = [
    ReminderCard {
        arabic: "اللّهُـمَّ أَجِرْنِي مِنَ النّار",
        translation: "O Allah, protect me from the Fire.",
    },
    ReminderCard {
        arabic: "اللّهُـمَّ اغْفِرْ لي",
        translation: "O Allah, forgive me.",
    },
];

pub const VERSES_AND_HADITHS: [ReminderCard; 2] = [
    ReminderCard {
        arabic: "أَلَا بِذِكْرِ اللَّهِ تَطْمَئِنُّ الْقُلُوبُ",
        translation: "Surely in the remembrance of Allah do hearts find rest. (13:28)",
    },
    ReminderCard {
        arabic: "أفضلُ الذِّكرِ لا إلهَ إلَّا الله",
        translation: "The best remembrance is: there is no god but Allah. (Hadith)",
    },
];

/// Counts taps for a single dhikr. Counting continues past the target.
#[derive(Debug, Clone)]
pub struct DhikrCounter {
    dhikr: Dhikr,
    count: u32,
}

impl DhikrCounter {
    pub fn new(dhikr: Dhikr) -> Self {
        Self { dhikr, count: 0 }
    }

    pub fn dhikr(&self) -> Dhikr {
        self.dhikr
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Switching dhikr starts over.
    pub fn select(&mut self, dhikr: Dhikr) {
        self.dhikr = dhikr;
        self.count = 0;
    }

    pub fn target_reached(&self) -> bool {
        self.count >= self.dhikr.target
    }
}

/// Walks through `phrases`, `target` taps each.
#[derive(Debug, Clone)]
pub struct DhikrSequence {
    phrases: Vec<&'static str>,
    target: u32,
    step: usize,
    count: u32,
}

impl Default for DhikrSequence {
    /// SubhanAllah, Allahu Akbar, Alhamdulillah, 33 each.
    fn default() -> Self {
        Self::new(
            vec!["SubhanAllah", "Allahu Akbar", "Alhamdulillah"],
            DEFAULT_TARGET,
        )
    }
}

impl DhikrSequence {
    pub fn new(phrases: Vec<&'static str>, target: u32) -> Self {
        Self {
            phrases,
            target: target.max(1),
            step: 0,
            count: 0,
        }
    }

    /// Current phrase, `None` once the sequence is finished.
    pub fn current(&self) -> Option<&'static str> {
        self.phrases.get(self.step).copied()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn phrases(&self) -> &[&'static str] {
        &self.phrases
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.phrases.len()
    }

    /// One tap. Reaching the target moves to the next phrase.
    /// Taps after the end are ignored.
    pub fn tap(&mut self) {
        if self.is_finished() {
            return;
        }
        self.count += 1;
        if self.count >= self.target {
            self.count = 0;
            self.step += 1;
        }
    }

    pub fn reset(&mut self) {
        self.step = 0;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_reaches_target() {
        let mut c = DhikrCounter::new(DHIKR_LIST[0]);
        for _ in 0..32 {
            c.increment();
        }
        assert!(!c.target_reached());
        c.increment();
        assert!(c.target_reached());
        c.increment();
        assert_eq!(c.count(), 34);
    }

    #[test]
    fn test_counter_select_resets() {
        let mut c = DhikrCounter::new(DHIKR_LIST[0]);
        c.increment();
        c.select(DHIKR_LIST[2]);
        assert_eq!(c.count(), 0);
        assert_eq!(c.dhikr().name, "Allahu Akbar");
    }

    #[test]
    fn test_sequence_advances_every_target() {
        let mut s = DhikrSequence::default();
        assert_eq!(s.current(), Some("SubhanAllah"));
        for _ in 0..33 {
            s.tap();
        }
        assert_eq!(s.step(), 1);
        assert_eq!(s.count(), 0);
        assert_eq!(s.current(), Some("Allahu Akbar"));
    }

    #[test]
    fn test_sequence_finishes_and_ignores_extra_taps() {
        let mut s = DhikrSequence::new(vec!["a", "b"], 2);
        for _ in 0..4 {
            s.tap();
        }
        assert!(s.is_finished());
        assert_eq!(s.current(), None);
        s.tap();
        assert_eq!(s.count(), 0);

        s.reset();
        assert_eq!(s.current(), Some("a"));
    }

    #[test]
    fn test_zero_target_is_clamped() {
        let mut s = DhikrSequence::new(vec!["a"], 0);
        s.tap();
        assert!(s.is_finished());
    }
}
