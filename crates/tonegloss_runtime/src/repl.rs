//! The interactive REPL.
//!
//! Each line is `<ipa> <gloss> [category]`, answered with a description of
//! the parsed word. The IPA runs up to the closing brace of its tone block and
//! may contain spaces. Lines starting with `:` are commands.

use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::error::{Result, RuntimeError};
use crate::render::{WordSummary, describe_table, describe_word};
use std::io::{self, Write};
use tonegloss_foundation::LetterTable;
use tonegloss_parser::{Word, WordParser};

/// Category used when a line gives none.
pub const DEFAULT_CATEGORY: &str = "";

const HELP: &str = "\
Enter a word as:  <ipa> <gloss> [category]
    e.g.  cɛ-li^{2.2} write-NMLZ N

Commands:
    :letters    List the letter table
    :json       Toggle JSON output
    :help       Show this help
    :quit       Exit (also Ctrl+D)";

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Parse a word.
    Word {
        /// The annotated transcription.
        ipa: &'a str,
        /// The gloss.
        gloss: &'a str,
        /// The category tag.
        category: &'a str,
    },
    /// Show help.
    Help,
    /// List the letter table.
    Letters,
    /// Toggle JSON output.
    ToggleJson,
    /// Leave the REPL.
    Quit,
}

impl<'a> Input<'a> {
    /// Interprets a non-empty line.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Usage`] for an unknown command or a line with
    /// too few or too many fields.
    pub fn parse(line: &'a str) -> Result<Self> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return match command {
                "help" | "h" | "?" => Ok(Self::Help),
                "letters" | "l" => Ok(Self::Letters),
                "json" => Ok(Self::ToggleJson),
                "quit" | "q" | "exit" => Ok(Self::Quit),
                other => Err(RuntimeError::Usage(format!(
                    "unknown command :{other} (try :help)"
                ))),
            };
        }

        // Without a tone block, fall back to the first field so the parser
        // can report the malformed IPA.
        let (ipa, rest) = match line.rfind('}') {
            Some(end) => line.split_at(end + 1),
            None => line.split_once(char::is_whitespace).unwrap_or((line, "")),
        };
        let fields: Vec<&str> = rest.split_whitespace().collect();
        match *fields.as_slice() {
            [gloss] => Ok(Self::Word {
                ipa,
                gloss,
                category: DEFAULT_CATEGORY,
            }),
            [gloss, category] => Ok(Self::Word {
                ipa,
                gloss,
                category,
            }),
            _ => Err(RuntimeError::Usage(
                "expected: <ipa> <gloss> [category]".to_string(),
            )),
        }
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Letter table words are parsed against.
    table: LetterTable,

    /// Whether to print words as JSON.
    json: bool,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(table: LetterTable) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, table))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, table: LetterTable) -> Self {
        editor.set_keywords(default_keywords());
        Self {
            editor,
            table,
            json: false,
            show_banner: true,
            prompt: "tg> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets JSON output.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The letter table in use.
    #[must_use]
    pub const fn table(&self) -> &LetterTable {
        &self.table
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => return Ok(false),
            Err(e) => Self::print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one line and returns what to print, or `None` to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is malformed or the word does not parse.
    pub fn eval(&mut self, line: &str) -> Result<Option<String>> {
        let output = match Input::parse(line)? {
            Input::Word {
                ipa,
                gloss,
                category,
            } => {
                let word = self.parse_word(ipa, gloss, category)?;
                if self.json {
                    serde_json::to_string_pretty(&WordSummary::new(&word))?
                } else {
                    describe_word(&word, &self.table)
                }
            }
            Input::Help => HELP.to_string(),
            Input::Letters => describe_table(&self.table),
            Input::ToggleJson => {
                self.json = !self.json;
                format!("JSON output {}", if self.json { "on" } else { "off" })
            }
            Input::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    /// Parses a single word against the REPL's table.
    ///
    /// # Errors
    ///
    /// Returns the parse error.
    pub fn parse_word(&self, ipa: &str, gloss: &str, category: &str) -> Result<Word> {
        tracing::info!(ipa, gloss, category, "parsing word");
        Ok(WordParser::new(&self.table).make_word(ipa, gloss, category)?)
    }

    /// Prints an error to stderr.
    fn print_error(error: &RuntimeError) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mTonegloss v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Enter <ipa> <gloss> [category], or :help. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
