//! REPL and CLI for Tonegloss.
//!
//! This crate provides:
//! - [`Repl`] - Interactive word parsing with rustyline
//! - [`load_table`] - Built-in or file-based letter tables
//! - Text and JSON renderings used by the `tonegloss` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod error;
pub mod highlight;
pub mod render;
pub mod repl;
pub mod table;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use render::{CountEntry, WordSummary, describe_table, describe_word, top_counts};
pub use repl::Repl;
pub use table::load_table;
