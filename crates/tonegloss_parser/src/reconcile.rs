//! Complete-morpheme reconciliation.
//!
//! Walks a word's morphemes and syllables side by side, keeping a running
//! letter count for each. A morpheme is complete when it starts and ends on
//! a syllable boundary, i.e. both running counts agree at its start and at
//! its end. Morphemes that begin or end inside a syllable are skipped.

use crate::morpheme::Morpheme;
use crate::syllable::Syllable;

/// Iterator over `(morpheme, syllables)` pairs where the morpheme spans
/// exactly that run of whole syllables.
///
/// Created by [`Word::complete_morphemes`](crate::Word::complete_morphemes).
/// Iteration ends normally when either sequence runs out.
#[derive(Clone, Debug)]
pub struct CompleteMorphemes<'w> {
    morphemes: std::slice::Iter<'w, Morpheme>,
    syllables: &'w [Syllable],
    /// Index of the first syllable not yet consumed.
    next_syllable: usize,
    /// Letters consumed by morphemes so far.
    morpheme_letters: usize,
    /// Letters consumed by syllables so far.
    syllable_letters: usize,
}

impl<'w> CompleteMorphemes<'w> {
    /// Starts a walk over `morphemes` and `syllables`.
    #[must_use]
    pub fn new(morphemes: &'w [Morpheme], syllables: &'w [Syllable]) -> Self {
        Self {
            morphemes: morphemes.iter(),
            syllables,
            next_syllable: 0,
            morpheme_letters: 0,
            syllable_letters: 0,
        }
    }
}

impl<'w> Iterator for CompleteMorphemes<'w> {
    type Item = (&'w Morpheme, &'w [Syllable]);

    fn next(&mut self) -> Option<Self::Item> {
        for morpheme in self.morphemes.by_ref() {
            let starts_on_boundary = self.morpheme_letters == self.syllable_letters;
            self.morpheme_letters += morpheme.len();

            let first = self.next_syllable;
            while self.syllable_letters < self.morpheme_letters {
                let syllable = self.syllables.get(self.next_syllable)?;
                self.syllable_letters += syllable.len();
                self.next_syllable += 1;
            }

            let ends_on_boundary = self.syllable_letters == self.morpheme_letters;
            if starts_on_boundary && ends_on_boundary && self.next_syllable > first {
                return Some((morpheme, &self.syllables[first..self.next_syllable]));
            }
        }
        None
    }
}
