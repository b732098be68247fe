//! CLI application entry point and configuration.
//!
//! This module provides the main CLI application logic, including argument parsing,
//! configuration loading, and command dispatch.

use crate::commands::{
    Cli, Commands, ConfigCommand, ExtractArgs, ExtractKind, OutputFormat, ReplayArgs, SessionArgs,
};
use crate::error::{CliError, Result};
use chrono::NaiveDate;
use clap::Parser;
use reggy_agent::{AgentError, DialogueEngine};
use reggy_analysis::{derive_age, detect_mood, extract_date_with_shape, extract_surname};
use reggy_core::config::{default_config_path, LogLevel};
use reggy_core::{DiscardTranscript, FileTranscript, ReggyConfig, TranscriptSink};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Environment variable overriding the transcript path.
const TRANSCRIPT_ENV: &str = "REGGY_TRANSCRIPT";

/// Configuration for the CLI application.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Path of the configuration file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    /// Logging verbosity level from the command line.
    pub verbosity: u8,
    /// Effective agent configuration.
    pub reggy: ReggyConfig,
}

/// Main CLI application.
#[derive(Debug)]
pub struct App {
    /// Application configuration.
    pub config: AppConfig,
    /// Parsed CLI arguments.
    pub cli: Cli,
}

/// How user lines reach the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// A person types at the prompt; their input is already on screen.
    Interactive,
    /// Lines come from a script and are echoed after the prompt.
    Replay,
}

impl App {
    /// Create a new application instance from command line arguments.
    pub fn new() -> Result<Self> {
        Self::from_cli(Cli::parse())
    }

    /// Create an application instance from already parsed arguments.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = Self::load_config(&cli)?;
        Ok(Self { config, cli })
    }

    /// Load configuration from file and environment.
    fn load_config(cli: &Cli) -> Result<AppConfig> {
        let mut config = AppConfig {
            verbosity: cli.verbose,
            ..AppConfig::default()
        };

        // Explicit path must exist; the platform default is optional.
        if let Some(config_path) = &cli.config {
            if !config_path.exists() {
                return Err(CliError::Config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            config.reggy = ReggyConfig::load(config_path)?;
            config.config_path = Some(config_path.clone());
        } else if let Some(default_path) = default_config_path().filter(|p| p.exists()) {
            config.reggy = ReggyConfig::load(&default_path)?;
            config.config_path = Some(default_path);
        }

        // Override with environment variables
        if let Ok(transcript) = std::env::var(TRANSCRIPT_ENV) {
            if !transcript.trim().is_empty() {
                config.reggy.transcript.path = PathBuf::from(transcript);
            }
        }

        Ok(config)
    }

    /// Run the application.
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();
        log::debug!(
            "reggy {} ({}), config: {:?}",
            env!("CARGO_PKG_VERSION"),
            option_env!("REGGY_GIT_COMMIT").unwrap_or("unknown commit"),
            self.config.config_path
        );

        // Dispatch command
        match &self.cli.command {
            None => self.handle_chat(&SessionArgs::default()),
            Some(Commands::Chat(args)) => self.handle_chat(args),
            Some(Commands::Replay(args)) => self.handle_replay(args),
            Some(Commands::Extract(args)) => self.handle_extract(args),
            Some(Commands::Config(args)) => self.handle_config(&args.command),
        }
    }

    /// Set up logging based on verbosity level.
    fn setup_logging(&self) {
        let level = match self.config.verbosity {
            0 => match self.config.reggy.logging.level {
                LogLevel::Error => log::LevelFilter::Error,
                LogLevel::Warn => log::LevelFilter::Warn,
                LogLevel::Info => log::LevelFilter::Info,
                LogLevel::Debug => log::LevelFilter::Debug,
                LogLevel::Trace => log::LevelFilter::Trace,
            },
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_module_path(false)
            .format_target(false)
            .format_timestamp(None)
            .try_init()
            .ok(); // Ignore errors if logger already initialized
    }

    fn handle_chat(&self, args: &SessionArgs) -> Result<()> {
        let mut engine = self.build_engine(args);
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(
            &mut engine,
            stdin.lock(),
            &mut stdout,
            SessionMode::Interactive,
            &self.config.reggy.user_prefix,
        )
    }

    fn handle_replay(&self, args: &ReplayArgs) -> Result<()> {
        let file = File::open(&args.script).map_err(|e| {
            CliError::Command(format!(
                "cannot open script {}: {}",
                args.script.display(),
                e
            ))
        })?;
        let mut engine = self.build_engine(&args.session);
        let mut stdout = io::stdout();
        run_session(
            &mut engine,
            BufReader::new(file),
            &mut stdout,
            SessionMode::Replay,
            &self.config.reggy.user_prefix,
        )
    }

    fn handle_extract(&self, args: &ExtractArgs) -> Result<()> {
        let text = args.text.join(" ");
        let today = args.today.unwrap_or_else(local_today);
        println!("{}", render_extract(args.kind, &text, today, args.format)?);
        Ok(())
    }

    fn handle_config(&self, command: &ConfigCommand) -> Result<()> {
        match command {
            ConfigCommand::Show => {
                print!("{}", self.config.reggy.to_toml()?);
                Ok(())
            }
            ConfigCommand::Init { path, force } => {
                let target = match path {
                    Some(path) => path.clone(),
                    None => default_config_path().ok_or_else(|| {
                        CliError::Config("no platform configuration directory".to_string())
                    })?,
                };
                if target.exists() && !force {
                    return Err(CliError::Command(format!(
                        "{} already exists, use --force to overwrite",
                        target.display()
                    )));
                }
                ReggyConfig::default().save(&target)?;
                println!("wrote {}", target.display());
                Ok(())
            }
        }
    }

    fn build_engine(&self, args: &SessionArgs) -> DialogueEngine<Box<dyn TranscriptSink>> {
        let today = args.today.unwrap_or_else(local_today);
        DialogueEngine::new(&self.config.reggy, self.build_sink(args), today)
    }

    fn build_sink(&self, args: &SessionArgs) -> Box<dyn TranscriptSink> {
        if args.no_transcript || !self.config.reggy.transcript.enabled {
            log::info!("transcript disabled");
            return Box::new(DiscardTranscript);
        }
        let path = args
            .transcript
            .clone()
            .unwrap_or_else(|| self.config.reggy.transcript.path.clone());
        log::info!("transcript will be appended to {}", path.display());
        Box::new(FileTranscript::new(path))
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Drive a session from `input` until the exit keyword or end of input.
///
/// Agent lines go to `output` as they are produced. When input runs out
/// first, the session is closed without a farewell so the transcript is
/// still written.
pub fn run_session<S, R, W>(
    engine: &mut DialogueEngine<S>,
    mut input: R,
    output: &mut W,
    mode: SessionMode,
    user_prefix: &str,
) -> Result<()>
where
    S: TranscriptSink,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", engine.greeting())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", user_prefix)?;
        output.flush()?;

        buf.clear();
        let read = match input.read_until(b'\n', &mut buf) {
            Ok(read) => read,
            Err(err) => {
                log::error!("failed to read input: {}", err);
                engine.close()?;
                return Err(err.into());
            }
        };
        if read == 0 {
            if mode == SessionMode::Interactive {
                writeln!(output)?;
            }
            log::warn!("input ended before the conversation was finished");
            engine.close()?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let text = line.trim_end_matches(['\r', '\n']);
        if mode == SessionMode::Replay {
            writeln!(output, "{}", text.trim())?;
        }

        let outcome = match engine.handle_turn(text) {
            Ok(outcome) => outcome,
            Err(err @ AgentError::Transcript(_)) => {
                // The farewell was said before the flush failed; show it anyway.
                if let Some(last) = engine.transcript().lines().last() {
                    writeln!(output, "{}", last)?;
                }
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        for reply in &outcome.replies {
            writeln!(output, "{}", reply)?;
        }
        if outcome.is_terminal() {
            return Ok(());
        }
    }
}

/// Run one extractor and format its result.
pub fn render_extract(
    kind: ExtractKind,
    text: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let value = match kind {
        ExtractKind::Date => match extract_date_with_shape(text) {
            Some((shape, date)) => serde_json::json!({
                "found": true,
                "shape": shape,
                "date": date,
            }),
            None => serde_json::json!({ "found": false }),
        },
        ExtractKind::Age => match extract_date_with_shape(text) {
            Some((_, date)) => match derive_age(&date, today) {
                Ok(age) => serde_json::json!({ "found": true, "date": date, "age": age }),
                Err(err) => serde_json::json!({
                    "found": true,
                    "date": date,
                    "rejected": err.to_string(),
                }),
            },
            None => serde_json::json!({ "found": false }),
        },
        ExtractKind::Mood => serde_json::to_value(detect_mood(text))
            .map_err(|e| CliError::Serialize(e.to_string()))?,
        ExtractKind::Surname => serde_json::json!({ "surname": extract_surname(text) }),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&value).map_err(|e| CliError::Serialize(e.to_string()))
        }
        OutputFormat::Text => Ok(render_text(kind, text, today)),
    }
}

fn render_text(kind: ExtractKind, text: &str, today: NaiveDate) -> String {
    match kind {
        ExtractKind::Date => match extract_date_with_shape(text) {
            Some((shape, date)) => format!(
                "day={} month={} year={} shape={:?}",
                date.day, date.month, date.year, shape
            ),
            None => "no date found".to_string(),
        },
        ExtractKind::Age => match extract_date_with_shape(text) {
            Some((_, date)) => match derive_age(&date, today) {
                Ok(age) => format!("date={} age={}", date, age),
                Err(err) => format!("date={} rejected: {}", date, err),
            },
            None => "no date found".to_string(),
        },
        ExtractKind::Mood => {
            let mood = detect_mood(text);
            format!(
                "polarity={} keyword={}",
                mood.polarity,
                mood.matched_keyword.unwrap_or("none")
            )
        }
        ExtractKind::Surname => format!(
            "surname={}",
            extract_surname(text).unwrap_or_else(|| "none".to_string())
        ),
    }
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let app = App::new()?;
    app.run()
}
