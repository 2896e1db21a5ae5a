//! CSV corpus ingestion and word frequency analysis for Tonegloss.
//!
//! This crate provides:
//! - [`CsvRows`] - Headed CSV files as field mappings, BOM-tolerant
//! - [`CorpusRecord`] - The transcription, gloss, category and count of a row
//! - [`Analyzer`] - Parses every record and tallies words into an [`AnalysisReport`]
//! - [`AnalysisConfig`] - Which failures are skipped, rejected, or fatal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod record;
pub mod rows;

pub use analysis::{AnalysisReport, Analyzer, Rejection};
pub use config::AnalysisConfig;
pub use error::{CorpusError, Result};
pub use record::CorpusRecord;
pub use rows::{CsvRows, Row};
