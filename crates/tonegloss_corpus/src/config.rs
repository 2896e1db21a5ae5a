//! Configuration for corpus analysis.

use std::collections::BTreeSet;

/// Symbols that mark a record as unparseable rather than broken.
pub const DEFAULT_SKIP_SYMBOLS: &[&str] = &["?"];

/// Separator between alternative transcriptions in one record.
pub const DEFAULT_VARIANT_SEPARATOR: char = '/';

/// Configuration for corpus analysis.
///
/// Controls which parse failures stop the run and how records are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Unknown symbols that cause a record to be skipped with a warning.
    pub skip_symbols: BTreeSet<String>,

    /// Whether an unknown symbol outside `skip_symbols` aborts the analysis.
    pub strict_unknown_symbols: bool,

    /// Separator between variants in the IPA and gloss columns.
    pub variant_separator: char,

    /// Whether an empty gloss falls back to the record's text column.
    pub gloss_fallback_to_text: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            skip_symbols: DEFAULT_SKIP_SYMBOLS.iter().map(ToString::to_string).collect(),
            strict_unknown_symbols: true,
            variant_separator: DEFAULT_VARIANT_SEPARATOR,
            gloss_fallback_to_text: true,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration where no parse failure aborts the analysis.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_unknown_symbols: false,
            ..Self::default()
        }
    }

    /// Creates a configuration where every unknown symbol aborts the analysis.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            skip_symbols: BTreeSet::new(),
            ..Self::default()
        }
    }

    /// Returns true if records with `symbol` are skipped rather than fatal.
    #[must_use]
    pub fn is_skipped(&self, symbol: &str) -> bool {
        self.skip_symbols.contains(symbol)
    }

    /// Builder method to add a skipped symbol.
    #[must_use]
    pub fn with_skip_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.skip_symbols.insert(symbol.into());
        self
    }

    /// Builder method to set strictness for unknown symbols.
    #[must_use]
    pub fn with_strict_unknown_symbols(mut self, strict: bool) -> Self {
        self.strict_unknown_symbols = strict;
        self
    }

    /// Builder method to set the variant separator.
    #[must_use]
    pub fn with_variant_separator(mut self, separator: char) -> Self {
        self.variant_separator = separator;
        self
    }

    /// Builder method to enable/disable the gloss fallback.
    #[must_use]
    pub fn with_gloss_fallback_to_text(mut self, fallback: bool) -> Self {
        self.gloss_fallback_to_text = fallback;
        self
    }
}
