//! Wire records → display records.
//!
//! Plain mapping, no validation. Fields the API does not provide (audio key,
//! translation, transliteration) are left empty.

use crate::core::model::{QuranVerse, Verset};
use crate::remote::{Chapter, EditionChapter, Verse};

/// Chapter plus its ayahs as one record.
pub fn chapter_to_record(chapter: &Chapter, verses: &[Verse]) -> QuranVerse {
    QuranVerse {
        translation: chapter.english_name_translation.clone(),
        verses: verses.iter().map(verse_to_verset).collect(),
        ..QuranVerse::new(
            chapter.number,
            format!("{} - {}", chapter.english_name, chapter.name),
            chapter.name.clone(),
        )
    }
}

/// A single ayah. Prefers the in-chapter number when the API sends it.
pub fn verse_to_verset(verse: &Verse) -> Verset {
    Verset {
        number: verse.number_in_surah.unwrap_or(verse.number),
        arabic: verse.text.clone(),
        translation: String::new(),
        transliteration: String::new(),
    }
}

/// Ayahs with whatever chapter info is known. Empty input gives an empty record.
pub fn verses_to_record(verses: &[Verse], chapter_info: Option<&Chapter>) -> QuranVerse {
    if verses.is_empty() {
        return QuranVerse::default();
    }

    let number = chapter_info.map(|c| c.number).unwrap_or(0);
    QuranVerse {
        translation: chapter_info
            .map(|c| c.english_name_translation.clone())
            .unwrap_or_default(),
        verses: verses.iter().map(verse_to_verset).collect(),
        ..QuranVerse::new(
            number,
            chapter_info
                .map(|c| c.english_name.clone())
                .unwrap_or_else(|| format!("Sourate {number}")),
            chapter_info.map(|c| c.name.clone()).unwrap_or_default(),
        )
    }
}

/// One verse-less record per chapter, for the chapter list.
pub fn chapters_to_records(chapters: &[Chapter]) -> Vec<QuranVerse> {
    chapters.iter().map(|c| chapter_to_record(c, &[])).collect()
}

/// A lone verse, e.g. a lookup by key.
pub fn single_verse_to_record(verse: &Verse, chapter: Option<&Chapter>) -> QuranVerse {
    let number = chapter.map(|c| c.number).unwrap_or(0);
    QuranVerse {
        verses: vec![verse_to_verset(verse)],
        ..QuranVerse::new(
            number,
            chapter
                .map(|c| c.english_name.clone())
                .unwrap_or_else(|| format!("Sourate {number}")),
            verse.text.clone(),
        )
    }
}

/// Zips an Arabic edition with a translation edition, ayah by ayah.
///
/// Ayahs are paired by position; a translation shorter than the Arabic
/// leaves the remaining translations empty.
pub fn edition_pair_to_record(arabic: &EditionChapter, translated: &EditionChapter) -> QuranVerse {
    let chapter = &arabic.chapter;
    let verses = arabic
        .ayahs
        .iter()
        .enumerate()
        .map(|(i, ayah)| Verset {
            translation: translated
                .ayahs
                .get(i)
                .map(|t| t.text.clone())
                .unwrap_or_default(),
            ..verse_to_verset(ayah)
        })
        .collect();

    QuranVerse {
        translation: chapter.english_name_translation.clone(),
        audio: audio_key(&chapter.english_name),
        verses,
        ..QuranVerse::new(
            chapter.number,
            format!("{} ({})", chapter.english_name, chapter.english_name_translation),
            chapter.name.clone(),
        )
    }
}

/// `"Al-Faatiha"` → `"al_faatiha"`.
fn audio_key(english_name: &str) -> String {
    english_name
        .chars()
        .map(|c| match c {
            '-' | ' ' | '\'' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fatiha() -> Chapter {
        Chapter {
            number: 1,
            name: "الفاتحة".into(),
            english_name: "Al-Faatiha".into(),
            english_name_translation: "The Opening".into(),
            number_of_ayahs: Some(7),
            revelation_type: None,
        }
    }

    fn ayah(number: u32, in_surah: Option<u32>, text: &str) -> Verse {
        Verse {
            number,
            text: text.into(),
            number_in_surah: in_surah,
        }
    }

    #[test]
    fn test_chapter_to_record_fields() {
        let r = chapter_to_record(&fatiha(), &[ayah(1, Some(1), "بسم الله")]);
        assert_eq!(r.id, 1);
        assert_eq!(r.title, "Al-Faatiha - الفاتحة");
        assert_eq!(r.text, "الفاتحة");
        assert_eq!(r.translation, "The Opening");
        assert!(r.audio.is_empty());
        assert_eq!(r.verses.len(), 1);
        assert_eq!(r.verses[0].arabic, "بسم الله");
    }

    #[test]
    fn test_verse_number_prefers_in_surah() {
        assert_eq!(verse_to_verset(&ayah(6222, Some(1), "x")).number, 1);
        assert_eq!(verse_to_verset(&ayah(8, None, "x")).number, 8);
    }

    #[test]
    fn test_verses_to_record_empty_input() {
        let r = verses_to_record(&[], Some(&fatiha()));
        assert_eq!(r, QuranVerse::default());
    }

    #[test]
    fn test_verses_to_record_without_chapter_info() {
        let r = verses_to_record(&[ayah(1, Some(1), "x")], None);
        assert_eq!(r.id, 0);
        assert_eq!(r.title, "Sourate 0");
        assert!(r.text.is_empty());
    }

    #[test]
    fn test_verses_keep_source_order() {
        let verses = vec![ayah(1, Some(1), "a"), ayah(2, Some(2), "b"), ayah(3, Some(3), "c")];
        let r = verses_to_record(&verses, Some(&fatiha()));
        let numbers: Vec<u32> = r.verses.iter().map(|v| v.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_chapters_to_records_has_no_verses() {
        let records = chapters_to_records(&[fatiha()]);
        assert_eq!(records.len(), 1);
        assert!(!records[0].has_verses());
    }

    #[test]
    fn test_single_verse_to_record() {
        let r = single_verse_to_record(&ayah(2, Some(2), "الحمد لله"), Some(&fatiha()));
        assert_eq!(r.title, "Al-Faatiha");
        assert_eq!(r.text, "الحمد لله");
        assert_eq!(r.verses[0].number, 2);
    }

    #[test]
    fn test_edition_pair_zips_translation() {
        let arabic = EditionChapter {
            chapter: fatiha(),
            ayahs: vec![ayah(1, Some(1), "بسم"), ayah(2, Some(2), "الحمد")],
        };
        let translated = EditionChapter {
            chapter: fatiha(),
            ayahs: vec![ayah(1, Some(1), "Au nom d'Allah")],
        };
        let r = edition_pair_to_record(&arabic, &translated);
        assert_eq!(r.title, "Al-Faatiha (The Opening)");
        assert_eq!(r.audio, "al_faatiha");
        assert_eq!(r.verses[0].translation, "Au nom d'Allah");
        assert!(r.verses[1].translation.is_empty());
        assert_eq!(r.verses[1].arabic, "الحمد");
    }
}
