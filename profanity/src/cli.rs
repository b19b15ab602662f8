//! This file defines the command-line interface (CLI) for the profanity
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "profanity",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and censor bad words in text",
    long_about = "profanity finds configurable bad words in text, including leet-speak variants such as 'sh1t' or '5hit', and can remove or replace them using one of several substitution strategies.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress informational output on stderr.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `profanity` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports bad words without changing the input.
    #[command(about = "Report bad words without changing the input. Exits with 1 when any are found.")]
    Check(CheckCommand),

    /// Removes or replaces bad words.
    #[command(about = "Remove or replace bad words and print the sanitised text.", alias = "sanitize")]
    Sanitise(SanitiseCommand),
}

/// Input and configuration options shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a filter configuration file (YAML).
    #[arg(long = "config", short = 'c', value_name = "FILE", env = "PROFANITY_CONFIG", help = "Path to a filter configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Extra bad words added to the configured list.
    #[arg(long = "word", short = 'w', value_name = "WORD", value_delimiter = ',', help = "Add bad words (comma-separated or repeated).")]
    pub words: Vec<String>,

    /// Replace the configured bad words instead of extending them.
    #[arg(long = "only-words", requires = "words", help = "Use only the words given with --word.")]
    pub only_words: bool,

    /// Print machine-readable JSON instead of text.
    #[arg(long, help = "Print results as JSON.")]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `sanitise` command.
#[derive(Parser, Debug)]
pub struct SanitiseCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Substitution strategy, overriding the configuration file.
    #[arg(long, short = 's', value_name = "NAME", help = "Substitution strategy: ignore, empty, random-symbols, fixed-symbols, fixed-random-symbols, substitute-word, random-word or fixed-word.")]
    pub strategy: Option<String>,

    /// Write sanitised output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', conflicts_with = "json", help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the summary printed to stderr.
    #[arg(long = "no-summary", help = "Suppress the substitution summary.")]
    pub no_summary: bool,
}
