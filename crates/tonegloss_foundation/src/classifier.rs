//! Letter classification table.
//!
//! A [`LetterTable`] answers three questions about a bare letter symbol:
//! is it a vowel, how is it typeset, and where does it sort. The table is
//! loaded from JSON once and then only read, so one instance can be shared
//! by any number of concurrent parses.
//!
//! ```json
//! {
//!   "vowels":     [{"symbol": "i", "display": "i"}, ...],
//!   "consonants": [{"symbol": "ɲ", "display": "\\textltailn{}"}, ...]
//! }
//! ```
//!
//! Ranks follow file order: every vowel sorts before every consonant.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{Error, Result};

/// One entry of the JSON table.
#[derive(Debug, Clone, Deserialize)]
struct LetterEntry {
    symbol: String,
    display: String,
}

/// The top-level JSON structure for the letter table file.
#[derive(Debug, Deserialize)]
struct LetterFile {
    vowels: Vec<LetterEntry>,
    consonants: Vec<LetterEntry>,
}

/// Classification of a single known symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterClass {
    /// Whether the symbol is a vowel.
    pub vowel: bool,
    /// Typeset (TIPA) form.
    pub display: String,
    /// Position in the fixed phonetic ordering.
    pub rank: u16,
}

/// Immutable vowel/consonant lookup with display forms and ordering.
#[derive(Debug, Clone)]
pub struct LetterTable {
    classes: HashMap<String, LetterClass>,
    /// Symbols in rank order.
    ordered: Vec<String>,
    /// Multi-character symbols, longest first.
    digraphs: Vec<String>,
}

impl LetterTable {
    /// Parse a letter table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the table layout.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let file: LetterFile = serde_json::from_str(json)?;
        Ok(Self::from_entries(file))
    }

    fn from_entries(file: LetterFile) -> Self {
        let mut table = Self {
            classes: HashMap::new(),
            ordered: Vec::new(),
            digraphs: Vec::new(),
        };
        let tagged = file
            .vowels
            .into_iter()
            .map(|e| (e, true))
            .chain(file.consonants.into_iter().map(|e| (e, false)));
        for (entry, vowel) in tagged {
            if table.classes.contains_key(&entry.symbol) {
                continue;
            }
            let rank = u16::try_from(table.ordered.len()).unwrap_or(u16::MAX);
            if entry.symbol.chars().count() > 1 {
                table.digraphs.push(entry.symbol.clone());
            }
            table.ordered.push(entry.symbol.clone());
            table.classes.insert(
                entry.symbol,
                LetterClass {
                    vowel,
                    display: entry.display,
                    rank,
                },
            );
        }
        table
            .digraphs
            .sort_by_key(|d| std::cmp::Reverse(d.chars().count()));
        table
    }

    /// Looks up the classification of a symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&LetterClass> {
        self.classes.get(symbol)
    }

    /// Looks up a symbol, failing on unknown symbols.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLetter` error with the `UnknownSymbol` fault.
    pub fn classify(&self, symbol: &str) -> Result<&LetterClass> {
        self.get(symbol).ok_or_else(|| Error::unknown_symbol(symbol))
    }

    /// Whether `symbol` is a vowel.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown.
    pub fn is_vowel(&self, symbol: &str) -> Result<bool> {
        self.classify(symbol).map(|c| c.vowel)
    }

    /// The typeset form of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown.
    pub fn display_form(&self, symbol: &str) -> Result<&str> {
        self.classify(symbol).map(|c| c.display.as_str())
    }

    /// Position of `symbol` in the fixed ordering, if known.
    #[must_use]
    pub fn rank(&self, symbol: &str) -> Option<u16> {
        self.get(symbol).map(|c| c.rank)
    }

    /// Multi-character symbols, longest first.
    #[must_use]
    pub fn digraphs(&self) -> &[String] {
        &self.digraphs
    }

    /// Vowel symbols in rank order.
    pub fn vowels(&self) -> impl Iterator<Item = &str> {
        self.ordered
            .iter()
            .filter(|s| self.classes.get(*s).is_some_and(|c| c.vowel))
            .map(String::as_str)
    }

    /// Consonant symbols in rank order.
    pub fn consonants(&self) -> impl Iterator<Item = &str> {
        self.ordered
            .iter()
            .filter(|s| self.classes.get(*s).is_some_and(|c| !c.vowel))
            .map(String::as_str)
    }

    /// Number of known symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true if the table has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Load the default letter table embedded at compile time.
///
/// Uses `include_str!` to embed `data/letters.json`. Panics if the embedded
/// JSON is malformed, which a unit test rules out.
#[must_use]
pub fn default_table() -> LetterTable {
    let json = include_str!("../data/letters.json");
    LetterTable::from_json(json).expect("embedded letters.json is malformed")
}
