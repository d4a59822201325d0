use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kharcha_core::{Category, CategoryCatalog, CategoryKeywords};
use kharcha_pipeline::ExpenseParser;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod envelope;
mod logging;
mod state;

use envelope::{ExampleList, ExpenseResponse, ExpenseTextRequest};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("KHARCHA_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "kharcha",
    version,
    long_version = LONG_VERSION,
    about = "Extract expenses from short English/Hinglish phrases"
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log level for stderr (overrides config)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract one expense, e.g. `kharcha parse Maine 500 rupees khana pe kharch kiye`
    Parse {
        /// Phrase words; joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Language hint (accepted, not used by extraction)
        #[arg(long, default_value = "mixed")]
        language: String,
    },

    /// Extract one expense per input line, writing JSON Lines
    Batch {
        /// Input file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List categories and their keywords
    Categories {
        /// Only show the keywords of this category
        #[arg(long)]
        category: Option<Category>,
    },

    /// List example phrases
    Examples,

    /// Manage ~/.kharcha/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    let level = cli.log_level.as_deref().unwrap_or(&cfg.log.level);
    logging::init_logging(level)?;

    let pretty = cli.pretty || cfg.output.pretty;

    match cli.command {
        Command::Parse { text, language } => {
            let request = ExpenseTextRequest {
                text: text.join(" "),
                language,
            };
            let response = match build_parser() {
                Ok(parser) => envelope::process(&parser, &request),
                Err(e) => {
                    tracing::error!("{e:#}");
                    ExpenseResponse::internal(&e)
                }
            };
            print_json(&response, pretty)?;
            if !response.success {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Batch { input } => {
            let reader: Box<dyn BufRead> = match &input {
                Some(p) => Box::new(BufReader::new(
                    File::open(p).with_context(|| format!("open {}", p.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            run_batch(reader, &mut io::stdout().lock())?;
        }

        Command::Categories { category } => match category {
            Some(category) => print_json(&CategoryKeywords::of(category), pretty)?,
            None => print_json(&CategoryCatalog::snapshot(), pretty)?,
        },

        Command::Examples => {
            print_json(&ExampleList::all(), pretty)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn build_parser() -> Result<ExpenseParser> {
    ExpenseParser::new().context("building expense parser")
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{s}");
    Ok(())
}

/// One envelope per non-blank line. Returns the number of successes.
fn run_batch(reader: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let parser = build_parser();
    let mut ok = 0usize;

    let mut reader = reader;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        line_no += 1;
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read line {line_no}"))?;
        if n == 0 {
            break;
        }

        // invalid UTF-8 becomes U+FFFD rather than ending the batch
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        let response = match &parser {
            Ok(parser) => envelope::process(parser, &ExpenseTextRequest::from_line(line)),
            Err(e) => ExpenseResponse::internal(e),
        };
        if response.success {
            ok += 1;
        }
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
    }

    tracing::info!(succeeded = ok, "batch finished");
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_words() {
        let cli = Cli::try_parse_from(["kharcha", "parse", "chai", "20", "rs", "diye"]).unwrap();
        match cli.command {
            Command::Parse { text, language } => {
                assert_eq!(text.join(" "), "chai 20 rs diye");
                assert_eq!(language, "mixed");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_requires_text() {
        assert!(Cli::try_parse_from(["kharcha", "parse"]).is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["kharcha", "categories", "--pretty", "--log-level", "debug"])
            .unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_category_filter() {
        let cli = Cli::try_parse_from(["kharcha", "categories", "--category", "Bills"]).unwrap();
        match cli.command {
            Command::Categories { category } => assert_eq!(category, Some(Category::Bills)),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["kharcha", "categories", "--category", "groceries"]).is_err());
    }

    #[test]
    fn test_run_batch_survives_invalid_utf8() {
        let input: &[u8] = b"chai 20 rs diye\nbus \xff 30 rs diye\r\nspent 100 rupees on lunch\n";
        let mut out = Vec::new();
        let ok = run_batch(input, &mut out).unwrap();
        assert_eq!(ok, 3);

        let lines: Vec<ExpenseResponse> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        let second = lines[1].expense.as_ref().unwrap();
        assert_eq!(second.amount, 30.0);
        assert_eq!(second.category, Category::Transport);
        assert_eq!(second.description, "bus \u{FFFD}");
        assert_eq!(lines[2].expense.as_ref().unwrap().amount, 100.0);
    }

    #[test]
    fn test_run_batch_mixed_input() {
        let input = "Maine 500 rupees khana pe kharch kiye\n\n{\"text\": \"I like pizza\"}\n   \nspent on food\n";
        let mut out = Vec::new();
        let ok = run_batch(input.as_bytes(), &mut out).unwrap();
        assert_eq!(ok, 1);

        let lines: Vec<ExpenseResponse> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].success);
        assert_eq!(lines[0].expense.as_ref().unwrap().amount, 500.0);
        assert_eq!(
            lines[1].error.as_deref(),
            Some("No expense-related action found in the text")
        );
        assert_eq!(
            lines[2].error.as_deref(),
            Some("Could not extract valid amount from the text")
        );
    }
}
