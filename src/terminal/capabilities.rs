//! Color and emoji support derived from platform facts.

use crate::platform::PlatformFacts;
use tracing::debug;

/// What the attached terminal can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// ANSI styling escapes are interpreted.
    pub supports_color: bool,
    /// Emoji glyphs render by default.
    pub supports_emoji: bool,
}

impl TerminalCapabilities {
    /// Derive capabilities from captured platform facts.
    pub fn from_facts(facts: &PlatformFacts) -> Self {
        let caps = Self {
            supports_color: supports_color(facts),
            supports_emoji: supports_emoji(facts),
        };
        debug!(
            supports_color = caps.supports_color,
            supports_emoji = caps.supports_emoji,
            windows_like = facts.windows_like,
            "derived terminal capabilities"
        );
        caps
    }

    /// Capabilities of a plain, non-ANSI sink.
    pub const fn plain() -> Self {
        Self {
            supports_color: false,
            supports_emoji: false,
        }
    }
}

/// True iff the host reports ANSI output support.
pub fn supports_color(facts: &PlatformFacts) -> bool {
    facts.ansi_stdout
}

/// True unless on Windows outside a terminal host known to render emoji.
pub fn supports_emoji(facts: &PlatformFacts) -> bool {
    !facts.windows_like || facts.has_terminal_host_marker()
}
