//! Host platform facts consumed by capability detection.
//!
//! Detection reads the real process once; everything downstream works on
//! the captured `PlatformFacts` so tests can inject any platform.

use std::collections::BTreeMap;
use std::io::{self, IsTerminal};

/// Environment marker set by Windows Terminal, which renders emoji.
pub const TERMINAL_HOST_MARKER: &str = "WT_SESSION";

/// Snapshot of the platform properties that drive terminal capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFacts {
    /// Host belongs to the Windows OS family.
    pub windows_like: bool,
    /// Process environment at capture time.
    pub env: BTreeMap<String, String>,
    /// Stdout accepts ANSI escape sequences.
    pub ansi_stdout: bool,
}

impl PlatformFacts {
    /// Capture facts from the running process.
    pub fn detect() -> Self {
        let env: BTreeMap<String, String> = std::env::vars().collect();
        let ansi_stdout = detect_ansi_stdout(&env);
        Self {
            windows_like: cfg!(windows),
            env,
            ansi_stdout,
        }
    }

    /// Look up one captured environment variable.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// True when the terminal-host marker is present in the environment.
    pub fn has_terminal_host_marker(&self) -> bool {
        self.env.contains_key(TERMINAL_HOST_MARKER)
    }
}

#[cfg(windows)]
fn detect_ansi_stdout(_env: &BTreeMap<String, String>) -> bool {
    io::stdout().is_terminal() && crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn detect_ansi_stdout(env: &BTreeMap<String, String>) -> bool {
    // A dumb terminal echoes escape bytes literally.
    let dumb = env.get("TERM").is_some_and(|term| term == "dumb");
    io::stdout().is_terminal() && !dumb
}
