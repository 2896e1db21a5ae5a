//! Integration tests for the letter table
//!
//! Tests the built-in table, JSON loading, classification and ordering.

use tonegloss_foundation::{LetterTable, default_table};

// =============================================================================
// Built-in Table
// =============================================================================

#[test]
fn default_table_classifies_ipa() {
    let table = default_table();
    for vowel in ["a", "ɛ", "ɔ", "ɪ", "ə", "ɨ"] {
        assert!(table.is_vowel(vowel).unwrap(), "{vowel}");
    }
    for consonant in ["k", "ŋ", "ɲ", "ɟ", "kp", "gb", "r", "l"] {
        assert!(!table.is_vowel(consonant).unwrap(), "{consonant}");
    }
}

#[test]
fn default_table_rejects_unknown() {
    let table = default_table();
    let err = table.classify("?").unwrap_err();
    assert_eq!(err.unknown_symbol_text(), Some("?"));
    assert!(table.get("$").is_none());
}

#[test]
fn default_table_typeset_forms() {
    let table = default_table();
    assert_eq!(table.display_form("ɛ").unwrap(), "\\textepsilon{}");
    assert_eq!(table.display_form("ŋ").unwrap(), "\\textipa{N}");
    assert_eq!(table.display_form("kp").unwrap(), "\\t{kp}");
    assert_eq!(table.display_form("a").unwrap(), "a");
}

#[test]
fn vowels_rank_before_consonants() {
    let table = default_table();
    let last_vowel = table.vowels().filter_map(|v| table.rank(v)).max().unwrap();
    let first_consonant = table.consonants().filter_map(|c| table.rank(c)).min().unwrap();
    assert!(last_vowel < first_consonant);
}

// =============================================================================
// Custom Tables
// =============================================================================

#[test]
fn custom_table_from_json() {
    let json = r#"{
        "vowels": [{"symbol": "a", "display": "a"}, {"symbol": "aa", "display": "a:"}],
        "consonants": [{"symbol": "t", "display": "t"}, {"symbol": "ts", "display": "\\t{ts}"}]
    }"#;
    let table = LetterTable::from_json(json).unwrap();
    assert_eq!(table.len(), 4);
    assert!(!table.is_empty());
    assert_eq!(table.digraphs().len(), 2);
    assert!(table.is_vowel("aa").unwrap());
    assert_eq!(table.rank("a"), Some(0));
    assert_eq!(table.rank("ts"), Some(3));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(LetterTable::from_json("{\"vowels\": 3}").is_err());
}
