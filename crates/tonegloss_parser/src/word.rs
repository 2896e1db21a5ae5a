//! Words: two decompositions of one letter stream.
//!
//! A [`Word`] holds its morphemes and its syllables side by side. They are
//! built independently from the same letters and tone digits and need not
//! share boundaries; [`Word::complete_morphemes`] finds where they do.

use std::fmt;

use tonegloss_foundation::{LetterTable, Result};

use crate::letter::Letter;
use crate::morpheme::{MORPHEME_SEPARATOR, Morpheme, PARTICLE_GLOSS};
use crate::reconcile::CompleteMorphemes;
use crate::syllable::{Syllable, TONE_SEPARATOR};

/// A parsed word. Usable as a map key for frequency counting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Word {
    morphemes: Vec<Morpheme>,
    syllables: Vec<Syllable>,
    category: String,
}

impl Word {
    /// Creates a word.
    #[must_use]
    pub fn new(
        morphemes: Vec<Morpheme>,
        syllables: Vec<Syllable>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            morphemes,
            syllables,
            category: category.into(),
        }
    }

    /// The morphemes, in order.
    #[must_use]
    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    /// The syllables, in order.
    #[must_use]
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// The category tag (e.g. part of speech).
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// All letters of the word, in order.
    pub fn letters(&self) -> impl Iterator<Item = &Letter> {
        self.morphemes.iter().flat_map(|m| m.letters().iter())
    }

    /// Total number of letters.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.morphemes.iter().map(Morpheme::len).sum()
    }

    /// The syllable tones joined with dots.
    #[must_use]
    pub fn tones(&self) -> String {
        join(self.syllables.iter().map(Syllable::tone), TONE_SEPARATOR)
    }

    /// The morpheme texts joined with hyphens.
    #[must_use]
    pub fn text(&self) -> String {
        join(
            self.morphemes.iter().map(Morpheme::text),
            MORPHEME_SEPARATOR,
        )
    }

    /// The morpheme glosses joined with hyphens, `PART` standing for particles.
    #[must_use]
    pub fn gloss(&self) -> String {
        join(
            self.morphemes
                .iter()
                .map(|m| m.gloss().unwrap_or(PARTICLE_GLOSS)),
            MORPHEME_SEPARATOR,
        )
    }

    /// The syllables in TIPA notation, separated by dots.
    ///
    /// # Errors
    ///
    /// Returns an error if `table` does not know one of the symbols.
    pub fn typeset(&self, table: &LetterTable) -> Result<String> {
        let syllables = self
            .syllables
            .iter()
            .map(|s| s.typeset(table))
            .collect::<Result<Vec<_>>>()?;
        Ok(syllables.join("."))
    }

    /// The morphemes whose letters span whole syllables, with those syllables.
    #[must_use]
    pub fn complete_morphemes(&self) -> CompleteMorphemes<'_> {
        CompleteMorphemes::new(&self.morphemes, &self.syllables)
    }
}

fn join<S: AsRef<str>>(parts: impl Iterator<Item = S>, separator: char) -> String {
    let mut out = String::new();
    for (i, part) in parts.enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

impl fmt::Display for Word {
    /// Writes the word in the notation it was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{{{}}}", self.text(), self.tones())
    }
}
