//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TERMCUE_UI`, `TERMCUE_COLOR`, `TERMCUE_EMOJI`,
//!    then `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./termcue.toml in the current directory
//! 4. $XDG_CONFIG_HOME/termcue/termcue.toml (or ~/.config/termcue/termcue.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use crate::terminal::TerminalCapabilities;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod env;
mod sources;

use env::apply_env_overrides;
use sources::read_config_text;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
}

/// Terminal UI preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Allow interactive prompts. When false, prompting is an error.
    pub enabled: bool,
    pub color: Toggle,
    pub emoji: Toggle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Toggle::Auto,
            emoji: Toggle::Auto,
        }
    }
}

impl UiConfig {
    /// Apply color/emoji overrides on top of detected capabilities.
    pub fn capabilities(&self, detected: TerminalCapabilities) -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: self.color.resolve(detected.supports_color),
            supports_emoji: self.emoji.resolve(detected.supports_emoji),
        }
    }
}

/// Tri-state override for a detected capability.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    #[default]
    Auto,
    Always,
    Never,
}

impl Toggle {
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            Self::Auto => detected,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!("expected auto, always or never, got `{s}`")),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(crate) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "resolved config source");
    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

/// Root directory for per-user config files.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
