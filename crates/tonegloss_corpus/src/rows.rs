//! CSV row source.
//!
//! Reads a headed CSV file into one field mapping per record. Header names
//! are normalized so that exports whose first column is `\u{feff}"IPA"`
//! still expose an `IPA` field.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{CorpusError, Result};

/// Byte order mark some exports put in front of the first header.
const BOM: char = '\u{feff}';

/// One CSV record keyed by normalized header name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    /// Line the record starts on. The header row is line 1.
    pub line: usize,
    /// Field values by column name.
    pub fields: BTreeMap<String, String>,
}

impl Row {
    /// Creates a row from `(name, value)` pairs.
    pub fn new<K, V>(line: usize, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The value of column `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The value of column `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::MissingField`] if the column is absent.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| CorpusError::MissingField {
            line: self.line,
            field: name.to_string(),
        })
    }
}

/// Strips a leading byte order mark and surrounding quotes from a header.
#[must_use]
pub fn normalize_header(name: &str) -> String {
    name.trim_start_matches(BOM).trim_matches('"').to_string()
}

/// Iterator over the records of a headed CSV source.
pub struct CsvRows<R> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
    next_line: usize,
}

impl CsvRows<File> {
    /// Opens the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its header row
    /// cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: io::Read> CsvRows<R> {
    /// Reads CSV records from `reader`, taking the first row as headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the header row cannot be read.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = reader.headers()?.iter().map(normalize_header).collect();
        Ok(Self {
            headers,
            records: reader.into_records(),
            next_line: 2,
        })
    }

    /// The normalized header names, in column order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: io::Read> Iterator for CsvRows<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(CorpusError::Csv(e))),
        };
        let line = record
            .position()
            .and_then(|p| usize::try_from(p.line()).ok())
            .unwrap_or(self.next_line);
        self.next_line = line + 1;

        let fields = self
            .headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        Some(Ok(Row { line, fields }))
    }
}
