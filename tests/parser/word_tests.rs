//! Word assembly tests.

use tonegloss_foundation::{ErrorKind, MorphemeFault, default_table};
use tonegloss_parser::{Word, WordParser, split_tone_block};

fn word(ipa: &str, gloss: &str) -> Word {
    let table = default_table();
    WordParser::new(&table).make_word(ipa, gloss, "N").unwrap()
}

fn error(ipa: &str, gloss: &str) -> ErrorKind {
    let table = default_table();
    WordParser::new(&table)
        .make_word(ipa, gloss, "N")
        .unwrap_err()
        .kind
}

// =============================================================================
// Notation
// =============================================================================

#[test]
fn word_keeps_its_notation() {
    let w = word("cɛ-li^{2.2}", "write-NMLZ");
    assert_eq!(w.text(), "cɛ-li");
    assert_eq!(w.gloss(), "write-NMLZ");
    assert_eq!(w.tones(), "2.2");
    assert_eq!(w.category(), "N");
    assert_eq!(w.to_string(), "cɛ-li^{2.2}");
    assert_eq!(w.letter_count(), 4);
}

#[test]
fn hyphens_in_the_tone_block_read_as_dots() {
    let w = word("ɟe-je^{42-3}", "say-PST");
    assert_eq!(w.tones(), "42.3");
    assert_eq!(w.to_string(), "ɟe-je^{42.3}");
}

#[test]
fn particles_gloss_as_part() {
    let w = word("a-ba^{1.2}", "PART-bat");
    assert_eq!(w.gloss(), "PART-bat");
    assert!(w.morphemes()[0].is_particle());
    assert!(w.morphemes()[1].is_root());
}

#[test]
fn letters_run_across_morphemes() {
    let w = word("koka-nu-po^{12.3.4.56}", "PART-B-C");
    let symbols: Vec<&str> = w.letters().map(|l| l.symbol()).collect();
    assert_eq!(symbols, vec!["k", "o", "k", "a", "n", "u", "p", "o"]);
}

#[test]
fn word_typeset() {
    let table = default_table();
    let w = word("cɛ-li^{2.2}", "write-NMLZ");
    assert_eq!(
        w.typeset(&table).unwrap(),
        "c\\textepsilon{}\\textsuperscript{2}.li\\textsuperscript{2}"
    );
}

#[test]
fn syllables_ignore_morpheme_boundaries() {
    let w = word("ba-k-ta^{1.2}", "go-X-Y");
    let syllables: Vec<String> = w.syllables().iter().map(|s| s.text()).collect();
    assert_eq!(syllables, vec!["ba", "kta"]);
    assert_eq!(w.morphemes().len(), 3);
}

#[test]
fn tone_block_uses_the_last_caret() {
    assert_eq!(
        split_tone_block("k^{w}a^{3}"),
        Some(("k^{w}a", "3".to_string()))
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_tone_block() {
    assert!(matches!(error("cat123", "cat"), ErrorKind::BadIpaTone { ref ipa } if ipa == "cat123"));
    assert!(matches!(error("ka^{}", "x"), ErrorKind::BadIpaTone { .. }));
    assert!(matches!(error("ka^{1} ", "x"), ErrorKind::BadIpaTone { .. }));
}

#[test]
fn gloss_pieces_must_match() {
    assert!(matches!(
        error("cɛ-li^{2.2}", "write"),
        ErrorKind::MorphemeMismatch {
            fault: MorphemeFault::GlossCount {
                texts: 2,
                glosses: 1
            },
            ..
        }
    ));
}

#[test]
fn tones_must_run_out_with_the_morphemes() {
    assert!(matches!(
        error("koka^{1}", "chicken"),
        ErrorKind::MorphemeMismatch {
            fault: MorphemeFault::TonesExhausted,
            ..
        }
    ));
    assert!(matches!(
        error("koka^{1.2.3}", "chicken"),
        ErrorKind::MorphemeMismatch {
            fault: MorphemeFault::TonesLeftOver { remaining: 1 },
            ..
        }
    ));
}

#[test]
fn bad_letters_surface_from_the_morphemes() {
    assert!(matches!(
        error("k~a^{1}", "x"),
        ErrorKind::InvalidLetter { .. }
    ));
    let table = default_table();
    let err = WordParser::new(&table)
        .make_word("ka$^{1}", "x", "N")
        .unwrap_err();
    assert_eq!(err.unknown_symbol_text(), Some("$"));
}
