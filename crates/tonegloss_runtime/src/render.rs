//! Human-readable and JSON renderings of words, tables and reports.

use std::fmt::Write as _;

use serde::Serialize;
use tonegloss_corpus::AnalysisReport;
use tonegloss_foundation::LetterTable;
use tonegloss_parser::{Morpheme, Word};

fn role(morpheme: &Morpheme) -> &'static str {
    if morpheme.is_particle() {
        "particle"
    } else if morpheme.is_suffix() {
        "suffix"
    } else {
        "root"
    }
}

/// Describes a word: its morphemes, syllables and complete morphemes.
#[must_use]
pub fn describe_word(word: &Word, table: &LetterTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\x1b[1m{word}\x1b[0m  {}  [{}]", word.gloss(), word.category());

    let _ = writeln!(out, "  morphemes:");
    for morpheme in word.morphemes() {
        let gloss = morpheme.gloss().unwrap_or("-");
        let _ = writeln!(out, "    {:<12} {:<10} {}", morpheme.text(), gloss, role(morpheme));
    }

    let _ = writeln!(out, "  syllables:");
    for syllable in word.syllables() {
        let _ = writeln!(out, "    {syllable}");
    }

    let complete: Vec<String> = word
        .complete_morphemes()
        .map(|(morpheme, syllables)| {
            let spans: Vec<String> = syllables.iter().map(ToString::to_string).collect();
            format!("{} = {}", morpheme.text(), spans.join("."))
        })
        .collect();
    let _ = writeln!(out, "  complete morphemes:");
    if complete.is_empty() {
        let _ = writeln!(out, "    (none)");
    }
    for line in complete {
        let _ = writeln!(out, "    {line}");
    }

    match word.typeset(table) {
        Ok(tipa) => {
            let _ = write!(out, "  tipa: {tipa}");
        }
        Err(e) => {
            let _ = write!(out, "  tipa: unavailable ({e})");
        }
    }
    out
}

/// A word with its derived notations, as emitted by `--json`.
#[derive(Serialize)]
pub struct WordSummary<'w> {
    /// Morphemes joined with hyphens.
    pub text: String,
    /// Glosses joined with hyphens.
    pub gloss: String,
    /// Tones joined with dots.
    pub tones: String,
    /// Category tag.
    pub category: &'w str,
    /// Texts of the morphemes that span whole syllables.
    pub complete_morphemes: Vec<String>,
    /// The full parsed structure.
    pub word: &'w Word,
}

impl<'w> WordSummary<'w> {
    /// Summarizes `word`.
    #[must_use]
    pub fn new(word: &'w Word) -> Self {
        Self {
            text: word.text(),
            gloss: word.gloss(),
            tones: word.tones(),
            category: word.category(),
            complete_morphemes: word.complete_morphemes().map(|(m, _)| m.text()).collect(),
            word,
        }
    }
}

/// One line of a frequency listing.
#[derive(Serialize)]
pub struct CountEntry {
    /// The word in input notation.
    pub word: String,
    /// Glosses joined with hyphens.
    pub gloss: String,
    /// Category tag.
    pub category: String,
    /// Occurrences in the corpus.
    pub count: u64,
}

/// The `top` most frequent words of `report`, all of them if `top` is `None`.
#[must_use]
pub fn top_counts(report: &AnalysisReport, top: Option<usize>) -> Vec<CountEntry> {
    report
        .sorted_counts()
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|(word, count)| CountEntry {
            word: word.to_string(),
            gloss: word.gloss(),
            category: word.category().to_string(),
            count,
        })
        .collect()
}

/// Lists the vowels and consonants of `table` with their TIPA forms.
#[must_use]
pub fn describe_table(table: &LetterTable) -> String {
    let mut out = String::new();
    for (label, symbols) in [
        ("vowels", table.vowels().collect::<Vec<_>>()),
        ("consonants", table.consonants().collect::<Vec<_>>()),
    ] {
        let _ = writeln!(out, "{label} ({}):", symbols.len());
        for symbol in symbols {
            let display = table.display_form(symbol).unwrap_or(symbol);
            let _ = writeln!(out, "  {symbol:<4} {display}");
        }
    }
    out
}
