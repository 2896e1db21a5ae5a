//! Corpus records: the columns of one row the analysis reads.

use crate::config::AnalysisConfig;
use crate::error::{CorpusError, Result};
use crate::rows::Row;

/// Column holding the annotated transcription.
pub const IPA_FIELD: &str = "IPA";
/// Column holding the gloss.
pub const GLOSS_FIELD: &str = "Gloss";
/// Column holding the free text, used when the gloss is empty.
pub const TEXT_FIELD: &str = "Text";
/// Column holding the category tag.
pub const CATEGORY_FIELD: &str = "Category";
/// Column holding the occurrence count.
pub const COUNT_FIELD: &str = "count";

/// One corpus entry, possibly holding several `/`-separated variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusRecord {
    /// Line of the source row.
    pub line: usize,
    /// Annotated transcription(s).
    pub ipa: String,
    /// Gloss(es), after the text fallback.
    pub gloss: String,
    /// Category tag.
    pub category: String,
    /// How often the entry occurs.
    pub count: u64,
}

impl CorpusRecord {
    /// Reads a record from `row`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::MissingField`] if a needed column is absent, or
    /// [`CorpusError::BadCount`] if the count is not a non-negative integer.
    pub fn from_row(row: &Row, config: &AnalysisConfig) -> Result<Self> {
        let raw_count = row.require(COUNT_FIELD)?;
        let count = raw_count
            .trim()
            .parse()
            .map_err(|_| CorpusError::BadCount {
                line: row.line,
                value: raw_count.to_string(),
            })?;

        let mut gloss = row.require(GLOSS_FIELD)?;
        if gloss.is_empty() && config.gloss_fallback_to_text {
            gloss = row.require(TEXT_FIELD)?;
        }

        Ok(Self {
            line: row.line,
            ipa: row.require(IPA_FIELD)?.to_string(),
            gloss: gloss.to_string(),
            category: row.require(CATEGORY_FIELD)?.to_string(),
            count,
        })
    }

    /// Pairs the IPA and gloss variants split on `separator`.
    ///
    /// Surplus variants on either side are dropped.
    pub fn variants(&self, separator: char) -> impl Iterator<Item = (&str, &str)> {
        self.ipa.split(separator).zip(self.gloss.split(separator))
    }
}
