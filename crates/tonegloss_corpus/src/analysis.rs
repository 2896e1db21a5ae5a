//! Word frequency analysis over a corpus.
//!
//! Every record is split into its variants and each variant is parsed into a
//! [`Word`] in order. Parsed words accumulate the record's count. The first
//! variant that fails stops the record: the variants before it stay counted,
//! the rest are not parsed, and the failure is kept as a [`Rejection`],
//! unless it is an unknown symbol the configuration treats as fatal, which
//! ends the run.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

use tonegloss_foundation::{Error, ErrorContext, LetterTable};
use tonegloss_parser::{Word, WordParser};
use tracing::{debug, error, warn};

use crate::config::AnalysisConfig;
use crate::error::{CorpusError, Result};
use crate::record::{CorpusRecord, GLOSS_FIELD, IPA_FIELD};
use crate::rows::{CsvRows, Row};

/// A record that was left out of the counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Line of the record.
    pub line: usize,
    /// Why the record was rejected, with the record attached as context.
    pub error: Error,
    /// Whether the record was skipped for a configured skip symbol.
    pub skipped_symbol: bool,
}

/// The outcome of an analysis.
#[derive(Clone, Debug, Default)]
pub struct AnalysisReport {
    word_counts: HashMap<Word, u64>,
    rejections: Vec<Rejection>,
    records: usize,
}

impl AnalysisReport {
    /// Occurrence count per distinct word.
    #[must_use]
    pub fn word_counts(&self) -> &HashMap<Word, u64> {
        &self.word_counts
    }

    /// Records left out of the counts, in corpus order.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Number of records read.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Number of distinct words.
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }

    /// Sum of all word counts.
    #[must_use]
    pub fn total_occurrences(&self) -> u64 {
        self.word_counts.values().sum()
    }

    /// The count for `word`, zero if it never occurred.
    #[must_use]
    pub fn count(&self, word: &Word) -> u64 {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    /// Words with their counts, most frequent first, ties broken by notation
    /// and then category.
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<(&Word, u64)> {
        let mut counts: Vec<(&Word, u64)> =
            self.word_counts.iter().map(|(w, &c)| (w, c)).collect();
        counts.sort_by_cached_key(|&(word, count)| {
            (Reverse(count), word.to_string(), word.category().to_string())
        });
        counts
    }
}

/// Parses corpus records and tallies words.
#[derive(Clone, Debug)]
pub struct Analyzer<'t> {
    parser: WordParser<'t>,
    config: AnalysisConfig,
}

impl<'t> Analyzer<'t> {
    /// Creates an analyzer that classifies symbols with `table`.
    #[must_use]
    pub fn new(table: &'t LetterTable, config: AnalysisConfig) -> Self {
        Self {
            parser: WordParser::new(table),
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes every row from `rows`.
    ///
    /// # Errors
    ///
    /// Returns the first row or record error, or a [`CorpusError::Parse`]
    /// for an unknown symbol that the configuration makes fatal.
    pub fn analyze<I>(&self, rows: I) -> Result<AnalysisReport>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        self.analyze_rows(rows, None)
    }

    /// Opens the CSV file at `path` and analyzes it.
    ///
    /// Errors carry the file name as context.
    ///
    /// # Errors
    ///
    /// As [`Analyzer::analyze`], plus failure to open the file.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        let rows = CsvRows::open(path)?;
        self.analyze_rows(rows, Some(&path.display().to_string()))
    }

    /// Parses the variants of `record` in order, stopping at the first failure.
    ///
    /// Returns the words parsed before the failure, and the failure if any.
    #[must_use]
    pub fn parse_record(&self, record: &CorpusRecord) -> (Vec<Word>, Option<Error>) {
        let mut words = Vec::new();
        for (ipa, gloss) in record.variants(self.config.variant_separator) {
            match self.parser.make_word(ipa, gloss, &record.category) {
                Ok(word) => words.push(word),
                Err(err) => return (words, Some(err)),
            }
        }
        (words, None)
    }

    fn analyze_rows<I>(&self, rows: I, source: Option<&str>) -> Result<AnalysisReport>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let mut report = AnalysisReport::default();

        for row in rows {
            let row = row?;
            let record = CorpusRecord::from_row(&row, &self.config)?;
            report.records += 1;

            let (words, err) = self.parse_record(&record);
            debug!(line = record.line, words = words.len(), "parsed record");
            for word in words {
                *report.word_counts.entry(word).or_default() += record.count;
            }
            let Some(err) = err else {
                continue;
            };
            let err = err.with_context(record_context(&record, source));

            let skipped_symbol = err
                .unknown_symbol_text()
                .is_some_and(|s| self.config.is_skipped(s));
            if skipped_symbol {
                warn!(line = record.line, error = %err, "bad character, skipping record");
            } else if err.is_unknown_symbol() && self.config.strict_unknown_symbols {
                error!(line = record.line, error = %err, "fatal error");
                return Err(CorpusError::Parse(err));
            } else {
                warn!(line = record.line, error = %err, "could not parse record");
            }
            report.rejections.push(Rejection {
                line: record.line,
                error: err,
                skipped_symbol,
            });
        }

        debug!(
            records = report.records,
            words = report.distinct_words(),
            rejected = report.rejections.len(),
            "analysis finished"
        );
        Ok(report)
    }
}

fn record_context(record: &CorpusRecord, source: Option<&str>) -> ErrorContext {
    let mut context = ErrorContext::new().with_line(record.line);
    if let Some(source) = source {
        context = context.with_source(source);
    }
    context
        .with_field(IPA_FIELD, &record.ipa)
        .with_field(GLOSS_FIELD, &record.gloss)
}
