//! Word assembly.
//!
//! [`WordParser`] is the entry point for turning an annotated transcription
//! into a [`Word`]. The transcription carries its tones in a trailing
//! `^{...}` block, e.g. `koka-nu-po^{12.3.4.56}`. Morphemes and syllables
//! are both built from it, independently of each other.

use std::sync::LazyLock;

use regex::Regex;
use tonegloss_foundation::{Error, LetterTable, Result};

use crate::letter::Letter;
use crate::morpheme::{MORPHEME_SEPARATOR, Morpheme, segment};
use crate::syllable::{Syllable, TONE_SEPARATOR, align_tones};
use crate::tokenizer::LetterTokenizer;
use crate::word::Word;

/// Matches a transcription ending in a tone block of digits, dots and hyphens.
static IPA_TONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*\^\{[0-9.\-]+\}$").unwrap_or_else(|e| panic!("invalid tone pattern: {e}"))
});

/// Builds letters, syllables, morphemes and words against one letter table.
#[derive(Clone, Copy, Debug)]
pub struct WordParser<'t> {
    tokenizer: LetterTokenizer<'t>,
}

impl<'t> WordParser<'t> {
    /// Creates a parser that classifies symbols with `table`.
    #[must_use]
    pub const fn new(table: &'t LetterTable) -> Self {
        Self {
            tokenizer: LetterTokenizer::new(table),
        }
    }

    /// The table used to classify symbols.
    #[must_use]
    pub const fn table(&self) -> &'t LetterTable {
        self.tokenizer.table()
    }

    /// The underlying tokenizer.
    #[must_use]
    pub const fn tokenizer(&self) -> &LetterTokenizer<'t> {
        &self.tokenizer
    }

    /// Tokenizes `text` into letters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLetter` for an unknown symbol or an illegal diacritic.
    pub fn make_letters(&self, text: &str) -> Result<Vec<Letter>> {
        self.tokenizer.tokenize(text)
    }

    /// Builds a single syllable from `text` and one tone.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLetter` for a bad letter or `SyllablesMustHaveVowells`
    /// if `text` has no vowel.
    pub fn make_syllable(&self, text: &str, tone: &str) -> Result<Syllable> {
        Syllable::new(self.make_letters(text)?, tone)
    }

    /// Groups `text` into syllables and pairs them with the dot-delimited `tones`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLetter`, `ToneTextSyllableMismatch` or
    /// `SyllablesMustHaveVowells`.
    pub fn make_syllables(&self, text: &str, tones: &str) -> Result<Vec<Syllable>> {
        let letters = self.make_letters(text)?;
        align_tones(&letters, text, tones)
    }

    /// Splits hyphenated `texts` and `glosses` into morphemes, apportioning
    /// the dot-delimited `tones` among them.
    ///
    /// # Errors
    ///
    /// Returns `MorphemeMismatch` when the pieces or tones do not line up, or
    /// any error raised while building a piece.
    pub fn make_morphemes(
        &self,
        texts: &str,
        glosses: &str,
        tones: &str,
    ) -> Result<Vec<Morpheme>> {
        segment(&self.tokenizer, texts, glosses, tones)
    }

    /// Parses an annotated transcription such as `koka-nu-po^{12.3.4.56}`.
    ///
    /// Hyphens inside the tone block are read as dots.
    ///
    /// # Errors
    ///
    /// Returns `BadIPATone` if `ipa` does not end in a tone block, otherwise
    /// any error from building the morphemes or the syllables.
    pub fn make_word(&self, ipa: &str, gloss: &str, category: &str) -> Result<Word> {
        let (text, tones) = split_tone_block(ipa).ok_or_else(|| Error::bad_ipa_tone(ipa))?;

        let morphemes = self.make_morphemes(text, gloss, &tones)?;
        let joined: String = text.chars().filter(|&c| c != MORPHEME_SEPARATOR).collect();
        let syllables = self.make_syllables(&joined, &tones)?;

        tracing::trace!(
            ipa,
            morphemes = morphemes.len(),
            syllables = syllables.len(),
            "parsed word"
        );
        Ok(Word::new(morphemes, syllables, category))
    }
}

/// Splits `ipa` into its text and its normalized tone string.
///
/// Returns `None` unless `ipa` ends in a `^{...}` block of digits, dots and
/// hyphens. The block starts at the last caret.
#[must_use]
pub fn split_tone_block(ipa: &str) -> Option<(&str, String)> {
    if !IPA_TONE.is_match(ipa) {
        return None;
    }
    let caret = ipa.rfind('^')?;
    let block = ipa[caret..].strip_prefix("^{")?.strip_suffix('}')?;
    let tones = block.replace(MORPHEME_SEPARATOR, &TONE_SEPARATOR.to_string());
    Some((&ipa[..caret], tones))
}
