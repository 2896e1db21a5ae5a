//! Tonegloss - Tone-annotated IPA transcription parser
//!
//! This crate re-exports all layers of the Tonegloss system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tonegloss_runtime    — REPL, CLI, text and JSON output
//! Layer 2: tonegloss_corpus     — CSV ingestion, word frequency analysis
//! Layer 1: tonegloss_parser     — Letters, syllables, morphemes, words
//! Layer 0: tonegloss_foundation — Letter table, Error
//! ```

pub use tonegloss_corpus as corpus;
pub use tonegloss_foundation as foundation;
pub use tonegloss_parser as parser;
pub use tonegloss_runtime as runtime;
