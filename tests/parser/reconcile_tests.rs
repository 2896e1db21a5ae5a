//! Complete-morpheme reconciliation tests.

use tonegloss_foundation::default_table;
use tonegloss_parser::{CompleteMorphemes, WordParser};

/// Each complete morpheme's text with the texts of its syllables.
fn complete(ipa: &str, gloss: &str) -> Vec<(String, Vec<String>)> {
    let table = default_table();
    let word = WordParser::new(&table).make_word(ipa, gloss, "").unwrap();
    word.complete_morphemes()
        .map(|(morpheme, syllables)| {
            (
                morpheme.text(),
                syllables.iter().map(|s| s.text()).collect(),
            )
        })
        .collect()
}

#[test]
fn every_morpheme_on_boundaries_is_complete() {
    assert_eq!(
        complete("koka-nu-po^{12.3.4.56}", "PART-B-C"),
        vec![
            ("koka".to_string(), vec!["ko".to_string(), "ka".to_string()]),
            ("nu".to_string(), vec!["nu".to_string()]),
            ("po".to_string(), vec!["po".to_string()]),
        ]
    );
}

#[test]
fn morphemes_splitting_a_syllable_are_skipped() {
    let found = complete("ba-k-ta^{1.2}", "go-X-Y");
    let texts: Vec<&str> = found.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts, vec!["ba"]);
}

#[test]
fn labialized_coda_breaks_the_first_morphemes() {
    let found = complete("kɔk^{w}-ɪ-li^{2.3.4}", "chicken-X-PL");
    assert_eq!(found, vec![("li".to_string(), vec!["li".to_string()])]);
}

#[test]
fn single_morpheme_spans_the_word() {
    let found = complete("bəle^{2.2}", "sheep");
    assert_eq!(
        found,
        vec![("bəle".to_string(), vec!["bə".to_string(), "le".to_string()])]
    );
}

#[test]
fn coda_morpheme_folds_into_the_previous_syllable() {
    // One syllable "baŋ": neither morpheme covers it alone
    let found = complete("ba-ŋ^{3}", "go-PL");
    let texts: Vec<&str> = found.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts, Vec::<&str>::new());
}

#[test]
fn iterator_is_reusable_on_borrowed_parts() {
    let table = default_table();
    let word = WordParser::new(&table)
        .make_word("cɛ-li^{2.2}", "write-NMLZ", "N")
        .unwrap();
    let direct = CompleteMorphemes::new(word.morphemes(), word.syllables()).count();
    assert_eq!(direct, 2);
    assert_eq!(word.complete_morphemes().count(), direct);
}
