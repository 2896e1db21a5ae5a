//! Letters: a base symbol plus diacritic flags.
//!
//! A [`Letter`] is validated against a [`LetterTable`] when it is built and is
//! never mutated afterwards. The vowel bit and ordering rank are resolved at
//! that point and cached, so later stages need no access to the table.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tonegloss_foundation::{Error, LetterFault, LetterTable, Result};

use crate::tokenizer::{LABIALIZED_SUFFIX, LONG_SUFFIX, NASAL_PREFIX};

/// Dialectal variant folded into its standard form at construction.
const CANONICAL_FORMS: &[(&str, &str)] = &[("r", "l")];

/// A single IPA letter.
///
/// Equality and hashing use the symbol and the three diacritic flags. The
/// total order sorts by phonetic rank (all vowels before all consonants), then
/// nasalized, labialized, long, and finally the symbol text.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct Letter {
    symbol: String,
    nasalized: bool,
    labialized: bool,
    long: bool,
    vowel: bool,
    rank: u16,
}

impl Letter {
    /// Builds a letter, checking the diacritic rules against `table`.
    ///
    /// `"r"` is stored as `"l"`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLetter` error if the symbol is unknown, if the letter
    /// is both nasalized and labialized, if a consonant is nasalized or long,
    /// or if a vowel is labialized.
    pub fn new(
        symbol: &str,
        nasalized: bool,
        labialized: bool,
        long: bool,
        table: &LetterTable,
    ) -> Result<Self> {
        let symbol = CANONICAL_FORMS
            .iter()
            .find(|(variant, _)| *variant == symbol)
            .map_or(symbol, |(_, canonical)| *canonical);
        let spelled = || render(symbol, nasalized, labialized, long);

        if nasalized && labialized {
            return Err(Error::invalid_letter(
                spelled(),
                LetterFault::NasalizedAndLabialized,
            ));
        }
        let class = table
            .classify(symbol)
            .map_err(|_| Error::unknown_symbol(symbol))?;
        if nasalized && !class.vowel {
            return Err(Error::invalid_letter(
                spelled(),
                LetterFault::NasalizedConsonant,
            ));
        }
        if long && !class.vowel {
            return Err(Error::invalid_letter(spelled(), LetterFault::LongConsonant));
        }
        if labialized && class.vowel {
            return Err(Error::invalid_letter(
                spelled(),
                LetterFault::LabializedVowel,
            ));
        }

        Ok(Self {
            symbol: symbol.to_string(),
            nasalized,
            labialized,
            long,
            vowel: class.vowel,
            rank: class.rank,
        })
    }

    /// Builds a letter with no diacritics.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown.
    pub fn plain(symbol: &str, table: &LetterTable) -> Result<Self> {
        Self::new(symbol, false, false, false, table)
    }

    /// The base symbol (one character or a digraph).
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether the letter carries the nasal diacritic.
    #[must_use]
    pub const fn is_nasalized(&self) -> bool {
        self.nasalized
    }

    /// Whether the letter carries the labialization diacritic.
    #[must_use]
    pub const fn is_labialized(&self) -> bool {
        self.labialized
    }

    /// Whether the letter carries the length mark.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        self.long
    }

    /// Whether the base symbol is a vowel.
    #[must_use]
    pub const fn is_vowel(&self) -> bool {
        self.vowel
    }

    /// Renders the letter in the tokenizer's input notation.
    ///
    /// Tokenizing the result yields an equal letter.
    #[must_use]
    pub fn text(&self) -> String {
        render(&self.symbol, self.nasalized, self.labialized, self.long)
    }

    /// Renders the letter in TIPA notation.
    ///
    /// # Errors
    ///
    /// Returns an error if `table` does not know the symbol.
    pub fn typeset(&self, table: &LetterTable) -> Result<String> {
        let display = table.display_form(&self.symbol)?;
        let mut out = if self.nasalized {
            format!("\\~{{{display}}}")
        } else {
            display.to_string()
        };
        if self.labialized {
            out.push_str("\\super{w}");
        }
        if self.long {
            out.push(':');
        }
        Ok(out)
    }

    fn sort_key(&self) -> (u16, bool, bool, bool, &str) {
        (
            self.rank,
            self.nasalized,
            self.labialized,
            self.long,
            &self.symbol,
        )
    }
}

fn render(symbol: &str, nasalized: bool, labialized: bool, long: bool) -> String {
    let mut out = String::with_capacity(symbol.len() + 4);
    if nasalized {
        out.push_str(NASAL_PREFIX);
    }
    out.push_str(symbol);
    if labialized {
        out.push_str(LABIALIZED_SUFFIX);
    }
    if long {
        out.push_str(LONG_SUFFIX);
    }
    out
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.nasalized == other.nasalized
            && self.labialized == other.labialized
            && self.long == other.long
    }
}

impl Eq for Letter {}

impl Hash for Letter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.nasalized.hash(state);
        self.labialized.hash(state);
        self.long.hash(state);
    }
}

impl Ord for Letter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Letter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Renders a run of letters in input notation.
#[must_use]
pub fn letters_text(letters: &[Letter]) -> String {
    letters.iter().map(Letter::text).collect()
}

/// Renders a run of letters in TIPA notation.
///
/// # Errors
///
/// Returns an error if `table` does not know one of the symbols.
pub fn letters_typeset(letters: &[Letter], table: &LetterTable) -> Result<String> {
    letters.iter().map(|l| l.typeset(table)).collect()
}
