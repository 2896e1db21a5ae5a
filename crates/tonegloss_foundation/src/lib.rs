//! Error taxonomy and letter classification for Tonegloss.
//!
//! This crate provides:
//! - [`Error`] - Rich error types describing rejected input, with corpus context
//! - [`LetterTable`] - The vowel/consonant classifier, typeset forms, and ordering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod error;

pub use classifier::{LetterClass, LetterTable, default_table};
pub use error::{Error, ErrorContext, ErrorKind, LetterFault, MorphemeFault};

/// Result type alias using Tonegloss's Error type.
pub type Result<T> = std::result::Result<T, Error>;
