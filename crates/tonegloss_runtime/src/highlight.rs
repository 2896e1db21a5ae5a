//! Syntax highlighting for the REPL.

use std::borrow::Cow;

/// Highlighter for annotated transcriptions.
///
/// Colors the `^{...}` blocks (tones and labialization markers), morpheme
/// hyphens, and `:commands`.
pub struct ToneglossHighlighter;

impl ToneglossHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("\x1b[36m{line}\x1b[0m")); // cyan
        }
        if !line.contains(['^', '-']) {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut in_block = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                // Superscript blocks
                '^' if !in_block && chars.peek() == Some(&'{') => {
                    in_block = true;
                    result.push_str("\x1b[33m"); // yellow
                    result.push(c);
                }
                '}' if in_block => {
                    result.push(c);
                    result.push_str("\x1b[0m");
                    in_block = false;
                }

                // Morpheme separators
                '-' if !in_block => {
                    result.push_str("\x1b[2m-\x1b[0m"); // dim
                }

                _ => result.push(c),
            }
        }

        if in_block {
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}

impl Default for ToneglossHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
