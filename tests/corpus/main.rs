//! Integration tests for tonegloss_corpus.
//!
//! These exercise CSV ingestion and corpus analysis against files on disk.

mod analysis_tests;
mod rows_tests;

use std::io::Write;

use tempfile::NamedTempFile;

/// Header row as exported by spreadsheet tools, byte order mark included.
pub const HEADER: &str = "\u{feff}\"IPA\",Gloss,Text,Category,count";

/// Writes `rows` under [`HEADER`] to a temporary CSV file.
pub fn corpus_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
