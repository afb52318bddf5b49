//! QuickAdd CLI entry point.
//!
//! Provides `parse`, `chat`, and `robustness` subcommands for one-shot
//! parsing, an interactive follow-up loop over stdin, and the perturbation
//! report.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use quickadd::config::Config;
use quickadd::{IntentParser, ParseContext, ParseResult};

/// Turn a sentence into an event, class schedule or grade.
#[derive(Parser)]
#[command(name = "quickadd", version, about)]
struct Cli {
    /// Config file; defaults to `$QUICKADD_CONFIG_PATH` or `~/.quickadd/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSON logs to this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Parse one utterance and print the result.
    Parse {
        /// Text to parse.
        text: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read utterances from stdin, answering follow-up questions in turn.
    Chat {
        /// Print each result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Parse perturbed variants of an utterance and report stability.
    Robustness {
        /// Text to perturb.
        text: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logging_guard = match &cli.log_dir {
        Some(dir) => Some(quickadd::logging::init_file(dir)?),
        None => {
            quickadd::logging::init_cli()?;
            None
        }
    };

    let config = load_config(cli.config.as_deref())?;
    debug!(
        categories = config.categories.len(),
        courses = config.courses.len(),
        "configuration loaded"
    );
    let parser = IntentParser::from_config(&config);

    match cli.command {
        Command::Parse { text, json } => handle_parse(&parser, &config, &text, json),
        Command::Chat { json } => handle_chat(&parser, &config, json),
        Command::Robustness { text, json } => handle_robustness(&parser, &config, &text, json),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::load_from(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            config.apply_overrides(|key| std::env::var(key).ok());
            Ok(config)
        }
        None => Config::load().context("failed to load configuration"),
    }
}

fn render(result: &ParseResult, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string(result).context("failed to serialize result")
    } else {
        Ok(result.summary())
    }
}

/// Parse a single utterance.
fn handle_parse(
    parser: &IntentParser,
    config: &Config,
    text: &str,
    json: bool,
) -> anyhow::Result<()> {
    let result = parser.parse(text, &config.categories, &config.courses);
    println!("{}", render(&result, json)?);
    Ok(())
}

/// Interactive loop: answers are routed to the pending question, if any.
fn handle_chat(parser: &IntentParser, config: &Config, json: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut pending: Option<(ParseContext, Option<uuid::Uuid>)> = None;

    info!("chat started");
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let result = match pending.take() {
            Some((context, session_id)) => {
                parser.parse_follow_up(&line, context, session_id, &config.courses)
            }
            None => parser.parse(&line, &config.categories, &config.courses),
        };

        if let ParseResult::NeedsMoreInfo {
            context: Some(context),
            session_id,
            ..
        } = &result
        {
            pending = Some((context.clone(), *session_id));
        }

        if result != ParseResult::NotAttempted {
            writeln!(stdout, "{}", render(&result, json)?).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    info!("chat finished");
    Ok(())
}

/// Print the perturbation report.
fn handle_robustness(
    parser: &IntentParser,
    config: &Config,
    text: &str,
    json: bool,
) -> anyhow::Result<()> {
    let results = parser.run_robustness_tests(text, &config.categories, &config.courses);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("failed to serialize report")?
        );
        return Ok(());
    }
    for result in &results {
        println!(
            "{:<28} {:<16} {:<6} {}",
            format!("{:?}", result.perturbation),
            result.kind.to_string(),
            if result.stable { "ok" } else { "DRIFT" },
            result.input
        );
    }
    let stable = results.iter().filter(|r| r.stable).count();
    println!("{stable}/{} stable", results.len());
    Ok(())
}
