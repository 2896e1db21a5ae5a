//! Corpus analysis tests.

use tonegloss_corpus::{AnalysisConfig, Analyzer, CorpusError};
use tonegloss_foundation::{ErrorKind, default_table};

use crate::corpus_file;

#[test]
fn counts_words_across_the_file() {
    let file = corpus_file(&[
        "cɛ-li^{2.2},write-NMLZ,cɛli,N,3",
        "li^{3},eat,li,V,5",
        "li^{3},eat,li,V,2",
        "bəle^{2.2},sheep,bəle,N,1",
    ]);
    let table = default_table();
    let report = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap();

    assert_eq!(report.records(), 4);
    assert_eq!(report.distinct_words(), 3);
    assert_eq!(report.total_occurrences(), 11);
    assert!(report.rejections().is_empty());

    let sorted: Vec<(String, u64)> = report
        .sorted_counts()
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    assert_eq!(
        sorted,
        vec![
            ("li^{3}".to_string(), 7),
            ("cɛ-li^{2.2}".to_string(), 3),
            ("bəle^{2.2}".to_string(), 1),
        ]
    );
}

#[test]
fn same_text_in_another_category_is_another_word() {
    let file = corpus_file(&["li^{3},eat,li,V,1", "li^{3},eat,li,N,1"]);
    let table = default_table();
    let report = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap();
    assert_eq!(report.distinct_words(), 2);
}

#[test]
fn variants_split_on_slashes() {
    let file = corpus_file(&["li^{3}/le^{3}/lo^{3},eat/eat,li,V,2"]);
    let table = default_table();
    let report = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap();
    // The third transcription has no gloss to pair with
    assert_eq!(report.distinct_words(), 2);
    assert_eq!(report.total_occurrences(), 4);
}

#[test]
fn empty_gloss_falls_back_to_text() {
    let file = corpus_file(&["li^{3},,eat,V,1"]);
    let table = default_table();
    let report = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap();
    let (word, _) = report.sorted_counts()[0];
    assert_eq!(word.gloss(), "eat");
}

#[test]
fn bad_records_are_rejected_with_context() {
    let file = corpus_file(&[
        "li^{3},eat,li,V,1",
        "koka^{1},chicken,koka,N,1",
        "l?^{3},eat,li,V,1",
    ]);
    let table = default_table();
    let report = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap();

    assert_eq!(report.distinct_words(), 1);
    let rejections = report.rejections();
    assert_eq!(rejections.len(), 2);

    assert_eq!(rejections[0].line, 3);
    assert!(!rejections[0].skipped_symbol);
    assert!(matches!(
        rejections[0].error.kind,
        ErrorKind::MorphemeMismatch { .. }
    ));
    let context = rejections[0].error.context.as_ref().unwrap();
    assert_eq!(
        context.source.as_deref(),
        Some(file.path().display().to_string().as_str())
    );
    assert_eq!(context.line, Some(3));

    assert_eq!(rejections[1].line, 4);
    assert!(rejections[1].skipped_symbol);
}

#[test]
fn unknown_symbol_stops_strict_analysis() {
    let file = corpus_file(&["li^{3},eat,li,V,1", "l$^{3},eat,li,V,1"]);
    let table = default_table();
    let err = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap_err();
    match err {
        CorpusError::Parse(err) => assert_eq!(err.unknown_symbol_text(), Some("$")),
        other => panic!("expected a parse error, got {other}"),
    }
}

#[test]
fn lenient_analysis_rejects_unknown_symbols() {
    let file = corpus_file(&["li^{3},eat,li,V,1", "l$^{3},eat,li,V,1"]);
    let table = default_table();
    let report = Analyzer::new(&table, AnalysisConfig::lenient())
        .analyze_path(file.path())
        .unwrap();
    assert_eq!(report.distinct_words(), 1);
    assert_eq!(report.rejections().len(), 1);
}

#[test]
fn bad_count_is_fatal() {
    let file = corpus_file(&["li^{3},eat,li,V,lots"]);
    let table = default_table();
    let err = Analyzer::new(&table, AnalysisConfig::default())
        .analyze_path(file.path())
        .unwrap_err();
    assert!(matches!(err, CorpusError::BadCount { line: 2, .. }));
}
