//! Error types for the Tonegloss system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context. Every
//! kind describes rejected input; none of them signals a programming fault.

use std::fmt;

use thiserror::Error;

/// The main error type for Tonegloss operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where in a corpus the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid letter error.
    #[must_use]
    pub fn invalid_letter(letter: impl Into<String>, fault: LetterFault) -> Self {
        Self::new(ErrorKind::InvalidLetter {
            letter: letter.into(),
            fault,
        })
    }

    /// Creates an unknown symbol error (an [`ErrorKind::InvalidLetter`] with
    /// [`LetterFault::UnknownSymbol`]).
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::invalid_letter(symbol, LetterFault::UnknownSymbol)
    }

    /// Creates a vowel-less syllable error.
    #[must_use]
    pub fn syllable_without_vowel(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyllablesMustHaveVowells { text: text.into() })
    }

    /// Creates a syllable/tone count mismatch error.
    #[must_use]
    pub fn tone_text_mismatch(
        text: impl Into<String>,
        tones: impl Into<String>,
        syllables: usize,
        tone_count: usize,
    ) -> Self {
        Self::new(ErrorKind::ToneTextSyllableMismatch {
            text: text.into(),
            tones: tones.into(),
            syllables,
            tone_count,
        })
    }

    /// Creates a morpheme mismatch error.
    #[must_use]
    pub fn morpheme_mismatch(
        text: impl Into<String>,
        gloss: impl Into<String>,
        tones: impl Into<String>,
        fault: MorphemeFault,
    ) -> Self {
        Self::new(ErrorKind::MorphemeMismatch {
            text: text.into(),
            gloss: gloss.into(),
            tones: tones.into(),
            fault,
        })
    }

    /// Creates a missing tone block error.
    #[must_use]
    pub fn bad_ipa_tone(ipa: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadIpaTone { ipa: ipa.into() })
    }

    /// Returns the offending symbol if this error is an unknown symbol.
    #[must_use]
    pub fn unknown_symbol_text(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidLetter {
                letter,
                fault: LetterFault::UnknownSymbol,
            } => Some(letter),
            _ => None,
        }
    }

    /// Returns true if this error is an unknown symbol.
    #[must_use]
    pub fn is_unknown_symbol(&self) -> bool {
        self.unknown_symbol_text().is_some()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A symbol/diacritic combination is illegal, or the symbol is unknown.
    #[error("invalid letter {letter:?}: {fault}")]
    InvalidLetter {
        /// The letter as it was assembled by the tokenizer.
        letter: String,
        /// Which rule was broken.
        fault: LetterFault,
    },

    /// A syllable candidate contains no vowel.
    #[error("syllables must have vowels: {text:?}")]
    SyllablesMustHaveVowells {
        /// The rendered letters of the offending chunk.
        text: String,
    },

    /// Syllable chunk count and tone token count differ.
    #[error(
        "unequal number of syllables in text({text:?}) and tone({tones:?}): \
         {syllables} syllables, {tone_count} tones"
    )]
    ToneTextSyllableMismatch {
        /// The phonetic text.
        text: String,
        /// The dot-delimited tone string.
        tones: String,
        /// Number of syllable chunks found in the text.
        syllables: usize,
        /// Number of tone tokens found in the tone string.
        tone_count: usize,
    },

    /// Text, gloss and tone streams could not be divided into morphemes.
    #[error("could not divide into morphemes text({text:?}), gloss({gloss:?}), tone({tones:?}): {fault}")]
    MorphemeMismatch {
        /// The hyphen-delimited phonetic text.
        text: String,
        /// The hyphen-delimited gloss.
        gloss: String,
        /// The dot-delimited tones of the whole word.
        tones: String,
        /// What went wrong.
        fault: MorphemeFault,
    },

    /// The phonetic string has no trailing `^{...}` tone block.
    #[error("could not extract tone from ipa({ipa:?})")]
    BadIpaTone {
        /// The raw phonetic string.
        ipa: String,
    },
}

/// Reasons a letter is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFault {
    /// The symbol is not in the letter table.
    UnknownSymbol,
    /// A letter cannot be both nasalized and labialized.
    NasalizedAndLabialized,
    /// Only vowels can be nasalized.
    NasalizedConsonant,
    /// Only vowels can be long.
    LongConsonant,
    /// Only consonants can be labialized.
    LabializedVowel,
}

impl fmt::Display for LetterFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol => write!(f, "unknown letter"),
            Self::NasalizedAndLabialized => write!(f, "cannot be both nasal and labialized"),
            Self::NasalizedConsonant => write!(f, "nasal letters must be vowels"),
            Self::LongConsonant => write!(f, "long letters must be vowels"),
            Self::LabializedVowel => write!(f, "labialized letters must be consonants"),
        }
    }
}

/// Reasons morpheme segmentation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphemeFault {
    /// Text and gloss split into different numbers of pieces.
    GlossCount {
        /// Number of hyphen-delimited text pieces.
        texts: usize,
        /// Number of hyphen-delimited gloss pieces.
        glosses: usize,
    },
    /// A morpheme needed more tone tokens than were left.
    TonesExhausted,
    /// Tone tokens remained after every morpheme took its share.
    TonesLeftOver {
        /// Number of unconsumed tone tokens.
        remaining: usize,
    },
}

impl fmt::Display for MorphemeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GlossCount { texts, glosses } => {
                write!(f, "{texts} text pieces but {glosses} gloss pieces")
            }
            Self::TonesExhausted => write!(f, "ran out of tones"),
            Self::TonesLeftOver { remaining } => {
                write!(f, "{remaining} tone(s) left over")
            }
        }
    }
}

/// Context about where in a corpus an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source (the header row is line 1).
    pub line: Option<usize>,
    /// Raw record fields, in the order they were attached.
    pub fields: Vec<(String, String)>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a raw record field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}")?,
            (Some(source), None) => write!(f, "at {source}")?,
            (None, Some(line)) => write!(f, "on line {line}")?,
            (None, None) => {}
        }
        for (name, value) in &self.fields {
            write!(f, " {name}={value:?}")?;
        }
        Ok(())
    }
}
