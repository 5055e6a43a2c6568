//! Command line argument parsing for the spellgram CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Spellgram - n-gram spelling suggestions from plain-text dictionaries
#[derive(Parser, Debug, Clone)]
#[command(name = "spellgram")]
#[command(about = "N-gram spelling suggestions from plain-text dictionaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellgramArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLGRAM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary directory, overrides the configuration
    #[arg(short, long, value_name = "DIR", global = true)]
    pub dictionaries: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellgramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct the spelling of a query
    Check(CheckArgs),

    /// List ranked suggestions for one token
    Suggest(SuggestArgs),

    /// Index the dictionaries and report per-file results
    Index(IndexArgs),

    /// Show the n-grams of a text
    Grams(GramsArgs),
}

/// Arguments for spell checking a query
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Query to check
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Locale of the query (default: first supported locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Also list up to this many suggestions per token
    #[arg(short, long)]
    pub max: Option<usize>,
}

/// Arguments for token suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Token to look up
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Locale of the token (default: first supported locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Maximum number of suggestions
    #[arg(short, long, default_value = "5")]
    pub max: usize,
}

/// Arguments for indexing
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Locales to index (default: supported locales from the configuration)
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,

    /// Entries per batch
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Commit after every batch
    #[arg(long)]
    pub commit: bool,
}

/// Arguments for n-gram decomposition
#[derive(Parser, Debug, Clone)]
pub struct GramsArgs {
    /// Text to decompose
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Gram length, repeatable (default: chosen from the text length)
    #[arg(short = 'n', long = "length")]
    pub lengths: Vec<usize>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
