//! Errors raised while reading and analyzing a corpus.

use thiserror::Error;

/// Errors that stop a corpus analysis.
///
/// Malformed words are usually recorded as rejections and do not stop the
/// run; only the unknown symbols the configuration treats as fatal surface
/// here as [`CorpusError::Parse`].
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The corpus is not well-formed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record lacks a column the analysis needs.
    #[error("line {line}: missing field {field:?}")]
    MissingField {
        /// Line of the record.
        line: usize,
        /// Name of the missing column.
        field: String,
    },

    /// A record's count column is not a non-negative integer.
    #[error("line {line}: bad count {value:?}")]
    BadCount {
        /// Line of the record.
        line: usize,
        /// The raw count text.
        value: String,
    },

    /// A word could not be parsed and the configuration makes that fatal.
    #[error("{}", describe_parse(.0))]
    Parse(#[from] tonegloss_foundation::Error),
}

fn describe_parse(err: &tonegloss_foundation::Error) -> String {
    match &err.context {
        Some(context) => format!("{err} {context}"),
        None => err.to_string(),
    }
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
