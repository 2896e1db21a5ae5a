//! Letter table selection for the command line.

use std::fs;
use std::path::Path;

use tonegloss_foundation::{LetterTable, default_table};

use crate::error::{Result, RuntimeError};

/// Loads the letter table from the JSON file at `path`, or the built-in
/// table when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid table.
pub fn load_table(path: Option<&Path>) -> Result<LetterTable> {
    let Some(path) = path else {
        return Ok(default_table());
    };
    let display = path.display().to_string();
    let json = fs::read_to_string(path).map_err(|source| RuntimeError::LetterTableIo {
        path: display.clone(),
        source,
    })?;
    let table = LetterTable::from_json(&json)
        .map_err(|source| RuntimeError::LetterTableFormat { path: display, source })?;
    tracing::info!(path = %path.display(), letters = table.len(), "loaded letter table");
    Ok(table)
}
