//! Letter tokenization.
//!
//! Converts cleaned phonetic text into a stream of [`Letter`]s. At each
//! position the tokenizer reads an optional nasal prefix, a base symbol
//! (digraph first, otherwise one character), and at most one suffix marker.

use tonegloss_foundation::{Error, LetterTable, Result};

use crate::letter::Letter;

/// Characters dropped before tokenizing.
pub const IGNORED_CHARS: &[char] = &['(', ')', ' ', '\u{a0}'];

/// Nasal marker written before the base symbol.
pub const NASAL_PREFIX: &str = "\\~";

/// Nasal markers written after the base symbol, in match order.
pub const NASAL_SUFFIXES: [&str; 3] = ["\u{303}", "^{~}", "~"];

/// Labialization marker written after the base symbol.
pub const LABIALIZED_SUFFIX: &str = "^{w}";

/// Length marker written after the base symbol.
pub const LONG_SUFFIX: &str = "ː";

#[derive(Clone, Copy)]
enum Diacritic {
    Nasal,
    Labialized,
    Long,
}

/// Suffix markers in match order. First match wins.
const SUFFIXES: &[(&str, Diacritic)] = &[
    (NASAL_SUFFIXES[0], Diacritic::Nasal),
    (NASAL_SUFFIXES[1], Diacritic::Nasal),
    (NASAL_SUFFIXES[2], Diacritic::Nasal),
    (LABIALIZED_SUFFIX, Diacritic::Labialized),
    (LONG_SUFFIX, Diacritic::Long),
];

/// Strips the ignorable characters from `text`.
#[must_use]
pub fn clean(text: &str) -> String {
    text.chars().filter(|c| !IGNORED_CHARS.contains(c)).collect()
}

/// Tokenizes phonetic text into letters.
#[derive(Clone, Copy, Debug)]
pub struct LetterTokenizer<'t> {
    table: &'t LetterTable,
}

impl<'t> LetterTokenizer<'t> {
    /// Creates a tokenizer that classifies symbols with `table`.
    #[must_use]
    pub const fn new(table: &'t LetterTable) -> Self {
        Self { table }
    }

    /// The table used to classify symbols.
    #[must_use]
    pub const fn table(&self) -> &'t LetterTable {
        self.table
    }

    /// Tokenizes `text` into letters, consuming all of it.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLetter` error for the first letter that breaks a
    /// diacritic rule or whose symbol is unknown.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Letter>> {
        let cleaned = clean(text);
        let mut rest = cleaned.as_str();
        let mut letters = Vec::with_capacity(rest.len());

        while !rest.is_empty() {
            let mut nasalized = false;
            let mut labialized = false;
            let mut long = false;

            if let Some(after) = rest.strip_prefix(NASAL_PREFIX) {
                nasalized = true;
                rest = after;
            }

            let Some((symbol, after)) = self.split_symbol(rest) else {
                // Nasal prefix with nothing after it
                return Err(Error::unknown_symbol(NASAL_PREFIX));
            };
            rest = after;

            let suffix = SUFFIXES.iter().find(|(marker, _)| rest.starts_with(marker));
            if let Some((marker, diacritic)) = suffix {
                rest = &rest[marker.len()..];
                match diacritic {
                    Diacritic::Nasal => nasalized = true,
                    Diacritic::Labialized => labialized = true,
                    Diacritic::Long => long = true,
                }
            }

            letters.push(Letter::new(symbol, nasalized, labialized, long, self.table)?);
        }

        Ok(letters)
    }

    /// Splits the next base symbol off `rest`.
    fn split_symbol<'s>(&self, rest: &'s str) -> Option<(&'s str, &'s str)> {
        let digraph = self
            .table
            .digraphs()
            .iter()
            .find(|d| rest.starts_with(d.as_str()));
        if let Some(digraph) = digraph {
            return Some(rest.split_at(digraph.len()));
        }
        let width = rest.chars().next()?.len_utf8();
        Some(rest.split_at(width))
    }
}
