//! Errors surfaced by the REPL and the command line.

use thiserror::Error;
use tonegloss_corpus::CorpusError;

/// Errors from the runtime layer.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A word could not be parsed.
    #[error(transparent)]
    Parse(#[from] tonegloss_foundation::Error),

    /// A corpus could not be read or analyzed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// A letter table file could not be read.
    #[error("could not read letter table {path}: {source}")]
    LetterTableIo {
        /// Path of the table file.
        path: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A letter table file is not a valid table.
    #[error("invalid letter table {path}: {source}")]
    LetterTableFormat {
        /// Path of the table file.
        path: String,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// A REPL line or command could not be understood.
    #[error("{0}")]
    Usage(String),
}

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
