//! Property tests over the public word parser.

use proptest::prelude::*;
use tonegloss_foundation::default_table;
use tonegloss_parser::WordParser;

const ONSETS: &[&str] = &["p", "t", "b", "d", "m", "n", "l", "s", "c", "ɟ", "ŋ", "k^{w}"];
const NUCLEI: &[&str] = &["a", "e", "i", "o", "u", "ɛ", "ɔ", "\\~a", "aː"];

/// Strategy for an open (CV) syllable.
fn open_syllable() -> impl Strategy<Value = String> {
    (prop::sample::select(ONSETS), prop::sample::select(NUCLEI))
        .prop_map(|(onset, nucleus)| format!("{onset}{nucleus}"))
}

/// Strategy for a morpheme made of one to three open syllables.
fn morpheme() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(open_syllable(), 1..4)
}

/// Strategy for one tone token.
fn tone() -> impl Strategy<Value = String> {
    "[1-5]{1,2}"
}

/// Strategy for a word of open syllables with a tone per syllable.
fn open_word() -> impl Strategy<Value = (Vec<Vec<String>>, Vec<String>)> {
    prop::collection::vec(morpheme(), 1..4).prop_flat_map(|morphemes| {
        let syllables = morphemes.iter().map(Vec::len).sum::<usize>();
        (
            Just(morphemes),
            prop::collection::vec(tone(), syllables..=syllables),
        )
    })
}

fn ipa(morphemes: &[Vec<String>], tones: &[String], tone_separator: &str) -> String {
    let text: Vec<String> = morphemes.iter().map(|m| m.concat()).collect();
    format!("{}^{{{}}}", text.join("-"), tones.join(tone_separator))
}

fn gloss(morphemes: &[Vec<String>]) -> String {
    (0..morphemes.len())
        .map(|i| format!("m{i}"))
        .collect::<Vec<_>>()
        .join("-")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A word's display form parses back to the same word.
    #[test]
    fn display_reparses((morphemes, tones) in open_word()) {
        let table = default_table();
        let parser = WordParser::new(&table);
        let gloss = gloss(&morphemes);
        let word = parser.make_word(&ipa(&morphemes, &tones, "."), &gloss, "N").unwrap();
        let again = parser.make_word(&word.to_string(), &word.gloss(), "N").unwrap();
        prop_assert_eq!(again, word);
    }

    /// Hyphen and dot tone separators are interchangeable.
    #[test]
    fn tone_separators_agree((morphemes, tones) in open_word()) {
        let table = default_table();
        let parser = WordParser::new(&table);
        let gloss = gloss(&morphemes);
        let dotted = parser.make_word(&ipa(&morphemes, &tones, "."), &gloss, "N").unwrap();
        let hyphenated = parser.make_word(&ipa(&morphemes, &tones, "-"), &gloss, "N").unwrap();
        prop_assert_eq!(dotted.tones(), tones.join("."));
        prop_assert_eq!(hyphenated, dotted);
    }

    /// In a word of open syllables every morpheme is complete.
    #[test]
    fn open_syllable_morphemes_are_complete((morphemes, tones) in open_word()) {
        let table = default_table();
        let gloss = gloss(&morphemes);
        let word = WordParser::new(&table)
            .make_word(&ipa(&morphemes, &tones, "."), &gloss, "N")
            .unwrap();

        let complete: Vec<(String, usize)> = word
            .complete_morphemes()
            .map(|(m, syllables)| (m.text(), syllables.len()))
            .collect();
        let expected: Vec<(String, usize)> = morphemes
            .iter()
            .map(|m| (m.concat(), m.len()))
            .collect();
        prop_assert_eq!(complete, expected);
    }

    /// Dropping a tone always fails to parse.
    #[test]
    fn missing_tone_is_rejected((morphemes, mut tones) in open_word()) {
        let table = default_table();
        tones.pop();
        prop_assume!(!tones.is_empty());
        let gloss = gloss(&morphemes);
        let result = WordParser::new(&table).make_word(&ipa(&morphemes, &tones, "."), &gloss, "N");
        prop_assert!(result.is_err());
    }
}
