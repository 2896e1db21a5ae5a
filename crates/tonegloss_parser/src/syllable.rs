//! Syllables, syllable grouping, and tone alignment.
//!
//! Grouping is greedy on vowels: while more than one vowel is left, a chunk
//! runs up to and including the next vowel, so leading consonant clusters
//! join the syllable of the vowel that follows them. The last chunk takes
//! whatever is left, trailing consonants included. Boundaries therefore
//! always fall right after a vowel.

use std::fmt;

use tonegloss_foundation::{Error, LetterTable, Result};

use crate::letter::{Letter, letters_text, letters_typeset};

/// Separator between tone tokens.
pub const TONE_SEPARATOR: char = '.';

/// A syllable: a run of letters containing at least one vowel, plus a tone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Syllable {
    letters: Vec<Letter>,
    tone: String,
}

impl Syllable {
    /// Creates a syllable.
    ///
    /// # Errors
    ///
    /// Returns `SyllablesMustHaveVowells` if no letter is a vowel.
    pub fn new(letters: Vec<Letter>, tone: impl Into<String>) -> Result<Self> {
        if !letters.iter().any(Letter::is_vowel) {
            return Err(Error::syllable_without_vowel(letters_text(&letters)));
        }
        Ok(Self {
            letters,
            tone: tone.into(),
        })
    }

    /// The letters of the syllable.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The tone digits (possibly empty).
    #[must_use]
    pub fn tone(&self) -> &str {
        &self.tone
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; [`Syllable::new`] is the only constructor and it requires a vowel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in input notation, without the tone.
    #[must_use]
    pub fn text(&self) -> String {
        letters_text(&self.letters)
    }

    /// The syllable in TIPA notation with the tone as a superscript.
    ///
    /// # Errors
    ///
    /// Returns an error if `table` does not know one of the symbols.
    pub fn typeset(&self, table: &LetterTable) -> Result<String> {
        let letters = letters_typeset(&self.letters, table)?;
        Ok(format!("{letters}\\textsuperscript{{{}}}", self.tone))
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{{{}}}", self.text(), self.tone)
    }
}

/// Iterator over the syllable-sized chunks of a letter slice.
///
/// Created by [`syllable_chunks`]. Yields non-empty slices that cover the
/// input exactly once, in order.
#[derive(Clone, Debug)]
pub struct SyllableChunks<'a> {
    rest: &'a [Letter],
    vowels_left: usize,
}

impl<'a> Iterator for SyllableChunks<'a> {
    type Item = &'a [Letter];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let split = if self.vowels_left > 1 {
            self.vowels_left -= 1;
            // A vowel is guaranteed ahead while more than one is left
            self.rest
                .iter()
                .position(Letter::is_vowel)
                .map_or(self.rest.len(), |i| i + 1)
        } else {
            self.rest.len()
        };
        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(chunk)
    }
}

/// Groups `letters` into syllable-sized chunks.
///
/// Non-empty input with `V` vowels yields `max(V, 1)` chunks. Every chunk but
/// the last ends in its only vowel. The last may hold no vowel at all, which
/// [`Syllable::new`] rejects later.
#[must_use]
pub fn syllable_chunks(letters: &[Letter]) -> SyllableChunks<'_> {
    SyllableChunks {
        rest: letters,
        vowels_left: letters.iter().filter(|l| l.is_vowel()).count(),
    }
}

/// Number of tone slots `letters` anchors: the chunks that carry a vowel.
#[must_use]
pub fn syllable_count(letters: &[Letter]) -> usize {
    syllable_chunks(letters)
        .filter(|chunk| chunk.iter().any(Letter::is_vowel))
        .count()
}

/// Pairs the syllable chunks of `letters` with the dot-delimited `tones`.
///
/// `text` is only used for error reporting.
///
/// # Errors
///
/// Returns `ToneTextSyllableMismatch` if the chunk and tone counts differ,
/// or `SyllablesMustHaveVowells` if a chunk has no vowel.
pub fn align_tones(letters: &[Letter], text: &str, tones: &str) -> Result<Vec<Syllable>> {
    let chunks: Vec<&[Letter]> = syllable_chunks(letters).collect();
    let tone_tokens: Vec<&str> = tones.split(TONE_SEPARATOR).collect();
    if chunks.len() != tone_tokens.len() {
        return Err(Error::tone_text_mismatch(
            text,
            tones,
            chunks.len(),
            tone_tokens.len(),
        ));
    }
    chunks
        .into_iter()
        .zip(tone_tokens)
        .map(|(chunk, tone)| Syllable::new(chunk.to_vec(), tone))
        .collect()
}
