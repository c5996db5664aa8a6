pub mod source;
pub mod sources;
pub mod types;

pub use source::{ApiError, ContentSource, PrayerTimesSource};
pub use sources::{AladhanClient, AlQuranClient};
pub use types::{Chapter, Coordinates, EditionChapter, Timings, Verse};
