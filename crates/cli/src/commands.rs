//! CLI command definitions for Reggy.
//!
//! Provides the interactive intake session, scripted replays, single-shot
//! extractor runs and configuration management.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("REGGY_BUILD_DATE"),
    " for ",
    env!("REGGY_TARGET_OS"),
    "/",
    env!("REGGY_TARGET_ARCH"),
    ")"
);

/// Main CLI application.
#[derive(Parser, Debug)]
#[command(name = "reggy", author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity
    #[arg(short, long, global = true, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REGGY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute (defaults to `chat`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive intake conversation
    Chat(SessionArgs),

    /// Run a conversation from a file of user lines
    Replay(ReplayArgs),

    /// Run one extractor on a piece of text
    Extract(ExtractArgs),

    /// Configuration file management
    Config(ConfigArgs),
}

/// Options shared by interactive and replayed sessions.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Transcript file to append to (overrides configuration)
    #[arg(long, conflicts_with = "no_transcript")]
    pub transcript: Option<PathBuf>,

    /// Do not write a transcript
    #[arg(long, default_value_t = false)]
    pub no_transcript: bool,

    /// Calendar date to compute ages against (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Replay arguments.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// File with one user line per turn
    pub script: PathBuf,

    /// Session options
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Extractor arguments.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Extractor to run
    #[arg(value_enum)]
    pub kind: ExtractKind,

    /// Text to analyse
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Calendar date to compute ages against (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Extractors exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractKind {
    /// Date of birth
    Date,
    /// Date of birth and the age it implies
    Age,
    /// Mood polarity
    Mood,
    /// Surname from a full name
    Surname,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration arguments.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration command
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration commands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Destination (defaults to the platform config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}
