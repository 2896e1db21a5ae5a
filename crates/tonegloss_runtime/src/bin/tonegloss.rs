//! Tonegloss CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tonegloss_corpus::{AnalysisConfig, Analyzer};
use tonegloss_parser::WordParser;
use tonegloss_runtime::{Repl, WordSummary, describe_word, load_table, top_counts};
use tracing_subscriber::EnvFilter;

/// Number of words `analyze` lists when `--top` is not given.
const DEFAULT_TOP: usize = 20;

/// The subcommand to run.
#[derive(Debug, Default)]
enum Command {
    /// Count the words of a CSV corpus.
    Analyze { file: PathBuf },
    /// Parse one word.
    Parse {
        ipa: String,
        gloss: String,
        category: String,
    },
    /// Interactive session.
    #[default]
    Repl,
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    command: Command,
    letters: Option<PathBuf>,
    lenient: bool,
    top: Option<usize>,
    json: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut positional = Vec::new();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--lenient" => config.lenient = true,
            "--json" => config.json = true,
            "--letters" => {
                let path = args.next().ok_or("--letters requires a path")?;
                config.letters = Some(PathBuf::from(path));
            }
            "--top" => {
                let value = args.next().ok_or("--top requires a value")?;
                config.top = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --top value: {value}"))?,
                );
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    config.command = match positional.next().as_deref() {
        None | Some("repl") => Command::Repl,
        Some("analyze") => {
            let file = positional.next().ok_or("analyze requires a CSV file")?;
            Command::Analyze {
                file: PathBuf::from(file),
            }
        }
        Some("parse") => {
            let (Some(ipa), Some(gloss)) = (positional.next(), positional.next()) else {
                return Err("parse requires <ipa> <gloss> [category]".into());
            };
            Command::Parse {
                ipa,
                gloss,
                category: positional.next().unwrap_or_default(),
            }
        }
        Some(other) => return Err(format!("unknown command: {other}").into()),
    };

    if let Some(extra) = positional.next() {
        return Err(format!("unexpected argument: {extra}").into());
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tonegloss {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let table = load_table(config.letters.as_deref())?;

    match config.command {
        Command::Analyze { file } => {
            let analysis = if config.lenient {
                AnalysisConfig::lenient()
            } else {
                AnalysisConfig::default()
            };
            let report = Analyzer::new(&table, analysis).analyze_path(&file)?;
            tracing::info!(
                file = %file.display(),
                records = report.records(),
                rejected = report.rejections().len(),
                "analyzed corpus"
            );

            let top = top_counts(&report, Some(config.top.unwrap_or(DEFAULT_TOP)));
            if config.json {
                println!("{}", serde_json::to_string_pretty(&top)?);
            } else {
                println!("Loaded {} words", report.distinct_words());
                for entry in top {
                    println!(
                        "{:>8}  {}  {}  [{}]",
                        entry.count, entry.word, entry.gloss, entry.category
                    );
                }
            }
        }
        Command::Parse {
            ipa,
            gloss,
            category,
        } => {
            let word = WordParser::new(&table).make_word(&ipa, &gloss, &category)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&WordSummary::new(&word))?);
            } else {
                println!("{}", describe_word(&word, &table));
            }
        }
        Command::Repl => {
            Repl::new(table)?.with_json(config.json).run()?;
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTonegloss\x1b[0m - Parse tone-annotated IPA transcriptions into words

\x1b[1mUSAGE:\x1b[0m
    tonegloss [OPTIONS] [COMMAND]

\x1b[1mCOMMANDS:\x1b[0m
    analyze <FILE>                  Count the words of a CSV corpus
    parse <IPA> <GLOSS> [CATEGORY]  Parse one word
    repl                            Start the interactive REPL (default)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --letters PATH     Use the letter table in PATH (JSON)
    --lenient          Reject unknown symbols instead of stopping (analyze)
    --top N            Number of words to list (analyze, default {DEFAULT_TOP})
    --json             Print JSON instead of text

\x1b[1mEXAMPLES:\x1b[0m
    tonegloss analyze corpus.csv --top 50
    tonegloss parse 'cɛ-li^{{2.2}}' write-NMLZ N
    tonegloss --letters letters.json repl

Set RUST_LOG=info (or debug, trace) for diagnostics on stderr."
    );
}
