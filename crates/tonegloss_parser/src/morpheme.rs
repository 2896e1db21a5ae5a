//! Morphemes and morpheme segmentation.
//!
//! Text and gloss are split on hyphens and walked in lock-step. Each piece
//! takes as many tone tokens from the word's shared tone stream as it has
//! syllables, so the tone stream is apportioned morpheme by morpheme.

use tonegloss_foundation::{Error, LetterTable, MorphemeFault, Result};

use crate::letter::{Letter, letters_text, letters_typeset};
use crate::syllable::{TONE_SEPARATOR, align_tones, syllable_count};
use crate::tokenizer::LetterTokenizer;

/// Separator between morphemes in text and gloss.
pub const MORPHEME_SEPARATOR: char = '-';

/// Gloss marking a grammatical particle.
pub const PARTICLE_GLOSS: &str = "PART";

/// A morpheme: its letters, its gloss, and its role in the word.
///
/// Particles carry no gloss. The first non-particle of a word is its root and
/// every later non-particle is a suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Morpheme {
    letters: Vec<Letter>,
    gloss: Option<String>,
    is_particle: bool,
    is_suffix: bool,
}

impl Morpheme {
    /// Creates a morpheme.
    #[must_use]
    pub fn new(
        letters: Vec<Letter>,
        gloss: Option<String>,
        is_particle: bool,
        is_suffix: bool,
    ) -> Self {
        Self {
            letters,
            gloss,
            is_particle,
            is_suffix,
        }
    }

    /// The letters of the morpheme.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The gloss, absent for particles.
    #[must_use]
    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// Whether the morpheme is a grammatical particle.
    #[must_use]
    pub const fn is_particle(&self) -> bool {
        self.is_particle
    }

    /// Whether the morpheme is a suffix.
    #[must_use]
    pub const fn is_suffix(&self) -> bool {
        self.is_suffix
    }

    /// Whether the morpheme is the root of its word.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        !self.is_particle && !self.is_suffix
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the morpheme has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in input notation.
    #[must_use]
    pub fn text(&self) -> String {
        letters_text(&self.letters)
    }

    /// The letters in TIPA notation.
    ///
    /// # Errors
    ///
    /// Returns an error if `table` does not know one of the symbols.
    pub fn typeset(&self, table: &LetterTable) -> Result<String> {
        letters_typeset(&self.letters, table)
    }
}

/// Splits `texts` and `glosses` into morphemes and apportions `tones`.
///
/// # Errors
///
/// Returns `MorphemeMismatch` if the text and gloss piece counts differ or
/// the tone tokens do not run out exactly with the last morpheme. Letter,
/// syllable and alignment errors from each piece propagate unchanged.
pub fn segment(
    tokenizer: &LetterTokenizer<'_>,
    texts: &str,
    glosses: &str,
    tones: &str,
) -> Result<Vec<Morpheme>> {
    let mismatch = |fault: MorphemeFault| Error::morpheme_mismatch(texts, glosses, tones, fault);

    let text_pieces: Vec<&str> = texts.split(MORPHEME_SEPARATOR).collect();
    let gloss_pieces: Vec<&str> = glosses.split(MORPHEME_SEPARATOR).collect();
    if text_pieces.len() != gloss_pieces.len() {
        return Err(mismatch(MorphemeFault::GlossCount {
            texts: text_pieces.len(),
            glosses: gloss_pieces.len(),
        }));
    }

    let mut tone_tokens = tones.split(TONE_SEPARATOR);
    let mut have_root = false;
    let mut morphemes = Vec::with_capacity(text_pieces.len());

    for (text, gloss) in text_pieces.into_iter().zip(gloss_pieces) {
        let is_particle = gloss == PARTICLE_GLOSS;
        let is_suffix = have_root && !is_particle;
        have_root |= !is_particle;

        let letters = tokenizer.tokenize(text)?;
        let wanted = syllable_count(&letters);
        let own: Vec<&str> = tone_tokens.by_ref().take(wanted).collect();
        if own.len() < wanted {
            return Err(mismatch(MorphemeFault::TonesExhausted));
        }
        // Consonant-only pieces anchor no tone, so there is nothing to check.
        if wanted > 0 {
            let own_tones = own.join(&TONE_SEPARATOR.to_string());
            align_tones(&letters, text, &own_tones)?;
        }

        let gloss = (!is_particle).then(|| gloss.to_string());
        morphemes.push(Morpheme::new(letters, gloss, is_particle, is_suffix));
    }

    let remaining = tone_tokens.count();
    if remaining > 0 {
        return Err(mismatch(MorphemeFault::TonesLeftOver { remaining }));
    }

    Ok(morphemes)
}
