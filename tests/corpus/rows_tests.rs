//! CSV row reading tests.

use tonegloss_corpus::{CorpusError, CsvRows};

use crate::corpus_file;

#[test]
fn headers_are_normalized() {
    let file = corpus_file(&[]);
    let rows = CsvRows::open(file.path()).unwrap();
    assert_eq!(rows.headers(), ["IPA", "Gloss", "Text", "Category", "count"]);
}

#[test]
fn rows_carry_their_line_numbers() {
    let file = corpus_file(&[
        "li^{3},eat,li,V,4",
        "\"cɛ-li^{2.2}\",write-NMLZ,cɛli,N,1",
    ]);
    let rows: Vec<_> = CsvRows::open(file.path())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].get("IPA"), Some("li^{3}"));
    assert_eq!(rows[1].line, 3);
    assert_eq!(rows[1].get("IPA"), Some("cɛ-li^{2.2}"));
    assert_eq!(rows[1].get("count"), Some("1"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CsvRows::open(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(CorpusError::Io(_))));
}

#[test]
fn ragged_rows_are_csv_errors() {
    let file = corpus_file(&["li^{3},eat"]);
    let mut rows = CsvRows::open(file.path()).unwrap();
    assert!(matches!(rows.next(), Some(Err(CorpusError::Csv(_)))));
}
