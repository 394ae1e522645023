//! Error types for terminal interaction and configuration loading.

use std::fmt;

// ---------------------------------------------------------------------------
// TerminalError
// ---------------------------------------------------------------------------

/// Errors surfaced by interactive terminal operations.
///
/// Device-level raw-mode failures never show up here: they are logged and
/// swallowed so prompts keep working on non-interactive input.
#[derive(Debug)]
pub enum TerminalError {
    /// Prompting was attempted while the terminal UI is disabled.
    InvalidState(String),
    /// The caller passed malformed arguments (programmer error).
    Precondition(String),
    /// The active terminal variant cannot perform this operation.
    Unsupported(String),
    /// The keystroke feed ended before an accepted character arrived.
    InputClosed,
    /// Writing to the status channel failed.
    Io(std::io::Error),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Self::Precondition(msg) => write!(f, "precondition violated: {msg}"),
            Self::Unsupported(msg) => write!(f, "unsupported operation: {msg}"),
            Self::InputClosed => write!(f, "input closed before a valid character was read"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerminalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
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
