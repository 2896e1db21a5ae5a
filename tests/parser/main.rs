//! Integration tests for Layer 1: Parser
//!
//! Tests for the word parsing pipeline:
//! - Letter tokenization
//! - Syllable grouping and tone alignment
//! - Morpheme segmentation and word assembly
//! - Complete-morpheme reconciliation
//! - Property-based invariants

mod properties;
mod reconcile_tests;
mod word_tests;
