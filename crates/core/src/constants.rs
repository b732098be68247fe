//! Application constants and configuration defaults.

/// Name the agent speaks under; every agent line starts with `"<name>: "`.
pub const DEFAULT_AGENT_NAME: &str = "Reggy++";

/// Prefix of user lines in the transcript and of the interactive prompt.
pub const DEFAULT_USER_PREFIX: &str = "You: ";

/// Transcript file written in the working directory when none is configured.
pub const DEFAULT_TRANSCRIPT_FILE: &str = "reggy.log";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "reggy";

/// Configuration file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Width of the `=` delimiter lines framing a transcript block.
pub const TRANSCRIPT_DELIMITER_WIDTH: usize = 40;

/// Youngest age accepted from a date of birth.
pub const MIN_PLAUSIBLE_AGE: i32 = 0;

/// Oldest age accepted from a date of birth.
pub const MAX_PLAUSIBLE_AGE: i32 = 150;
