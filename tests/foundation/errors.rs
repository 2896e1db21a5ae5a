//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tonegloss_foundation::{Error, ErrorContext, ErrorKind, LetterFault, MorphemeFault};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_letter() {
    let err = Error::invalid_letter("a^{w}", LetterFault::LabializedVowel);
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidLetter {
            fault: LetterFault::LabializedVowel,
            ..
        }
    ));
    assert!(format!("{err}").contains("a^{w}"));
}

#[test]
fn error_unknown_symbol() {
    let err = Error::unknown_symbol("?");
    assert!(err.is_unknown_symbol());
    assert_eq!(err.unknown_symbol_text(), Some("?"));
}

#[test]
fn only_unknown_symbols_report_a_symbol() {
    let err = Error::invalid_letter("\\~k", LetterFault::NasalizedConsonant);
    assert!(!err.is_unknown_symbol());
    assert_eq!(err.unknown_symbol_text(), None);
    assert_eq!(Error::bad_ipa_tone("cat").unknown_symbol_text(), None);
}

#[test]
fn error_syllable_without_vowel() {
    let err = Error::syllable_without_vowel("kt");
    assert!(matches!(err.kind, ErrorKind::SyllablesMustHaveVowells { .. }));
    assert!(format!("{err}").contains("kt"));
}

#[test]
fn error_tone_text_mismatch() {
    let err = Error::tone_text_mismatch("koka", "1", 2, 1);
    let msg = format!("{err}");
    assert!(msg.contains("koka"));
    assert!(matches!(
        err.kind,
        ErrorKind::ToneTextSyllableMismatch {
            syllables: 2,
            tone_count: 1,
            ..
        }
    ));
}

#[test]
fn error_morpheme_mismatch() {
    let err = Error::morpheme_mismatch(
        "ko-ka",
        "a",
        "1.2",
        MorphemeFault::GlossCount {
            texts: 2,
            glosses: 1,
        },
    );
    let msg = format!("{err}");
    assert!(msg.contains("ko-ka"));
    assert!(msg.contains("1.2"));
}

#[test]
fn error_bad_ipa_tone() {
    let err = Error::bad_ipa_tone("cat123");
    assert!(matches!(err.kind, ErrorKind::BadIpaTone { ref ipa } if ipa == "cat123"));
    assert!(format!("{err}").contains("cat123"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let ctx = ErrorContext::new()
        .with_source("corpus.csv")
        .with_line(12)
        .with_field("IPA", "l?^{3}");
    let err = Error::unknown_symbol("?").with_context(ctx);

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.line, Some(12));
    assert_eq!(context.to_string(), "at corpus.csv:12 IPA=\"l?^{3}\"");
}

#[test]
fn context_without_source() {
    let ctx = ErrorContext::new().with_line(3);
    assert_eq!(ctx.to_string(), "on line 3");
}

#[test]
fn errors_compare_by_kind_and_context() {
    let a = Error::bad_ipa_tone("x");
    let b = Error::bad_ipa_tone("x");
    assert_eq!(a, b);
    assert_ne!(a, b.with_context(ErrorContext::new().with_line(1)));
}
