//! Unified error types for the crate.

use std::fmt;

// ---------------------------------------------------------------------------
// TmuxError
// ---------------------------------------------------------------------------

/// Errors arising from driving the tmux binary.
#[derive(Debug)]
pub enum TmuxError {
    /// The subprocess could not be spawned at all (binary missing, io error).
    Spawn(String),
    /// The subprocess ran but exited non-zero; carries the subcommand and the
    /// captured output text.
    CommandFailed { command: String, detail: String },
    /// A list-windows line did not match the requested field layout.
    WindowFormat(String),
    /// A window index field held digits that don't fit the index type.
    WindowIndex(std::num::ParseIntError),
}

impl fmt::Display for TmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "spawn failed: {msg}"),
            Self::CommandFailed { command, detail } => {
                write!(f, "tmux {command} failed: {detail}")
            }
            Self::WindowFormat(line) => {
                write!(f, "unexpected format in list-windows result: {line}")
            }
            Self::WindowIndex(e) => write!(f, "window index: {e}"),
        }
    }
}

impl std::error::Error for TmuxError {}

impl From<std::num::ParseIntError> for TmuxError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::WindowIndex(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
