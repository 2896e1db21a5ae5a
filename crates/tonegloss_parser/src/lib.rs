//! Letter tokenizer, syllable grouper, tone aligner and morpheme segmenter
//! for Tonegloss.
//!
//! This crate provides:
//! - [`LetterTokenizer`] - Phonetic text to [`Letter`]s, diacritics included
//! - [`syllable_chunks`] / [`align_tones`] - Vowel-anchored grouping and tones
//! - [`segment`] - Hyphenated text and gloss to [`Morpheme`]s
//! - [`WordParser`] - Annotated transcriptions to [`Word`]s
//! - [`CompleteMorphemes`] - Morphemes that span whole syllables
//!
//! # Pipeline
//!
//! ```text
//! "koka-nu-po^{12.3.4.56}"  +  "PART-B-C"
//!         │
//!         ├── split_tone_block ──► text "koka-nu-po", tones "12.3.4.56"
//!         │
//!         ├── segment ───────────► [koka PART] [nu B] [po C]
//!         │
//!         └── align_tones ───────► ko^{12} ka^{3} nu^{4} po^{56}
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod letter;
pub mod morpheme;
pub mod parser;
pub mod reconcile;
pub mod syllable;
pub mod tokenizer;
pub mod word;


pub use letter::{Letter, letters_text, letters_typeset};
pub use morpheme::{MORPHEME_SEPARATOR, Morpheme, PARTICLE_GLOSS, segment};
pub use parser::{WordParser, split_tone_block};
pub use reconcile::CompleteMorphemes;
pub use syllable::{
    Syllable, SyllableChunks, TONE_SEPARATOR, align_tones, syllable_chunks, syllable_count,
};
pub use tokenizer::{LetterTokenizer, clean};
pub use word::Word;
