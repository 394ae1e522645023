//! Centralized escape sequences and prompt strings.
//!
//! This is the single place the byte-exact ANSI codes live; style and prompt
//! code only ever reference these constants.

// ---------------------------------------------------------------------------
// ANSI control sequences
// ---------------------------------------------------------------------------

pub const BOLD_ON: &str = "\x1b[1m";
pub const BOLD_OFF: &str = "\x1b[22m";
pub const COLOR_OFF: &str = "\x1b[39m";
pub const RESET_ALL: &str = "\x1b[0m";
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const CODE_RED: &str = "\x1b[31m";
pub const CODE_GREEN: &str = "\x1b[32m";
pub const CODE_YELLOW: &str = "\x1b[33m";
pub const CODE_BLUE: &str = "\x1b[34m";
pub const CODE_MAGENTA: &str = "\x1b[35m";
pub const CODE_CYAN: &str = "\x1b[36m";
pub const CODE_GREY: &str = "\x1b[1;30m";

/// Scroll-clear used when the terminal cannot interpret escapes.
pub const CLEAR_SCREEN_FALLBACK: &str = "\n\n";

pub const LINE_FEED: char = '\n';

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const CHOICES_OPEN: &str = "[";
pub const CHOICES_SEPARATOR: &str = "|";
pub const CHOICES_CLOSE: &str = "]";
pub const PROMPT_SUFFIX: &str = ": ";
pub const PROMPT_SPACER: &str = " ";

// ---------------------------------------------------------------------------
// Status marks
// ---------------------------------------------------------------------------

pub const MARK_SUCCESS_EMOJI: &str = "\u{2705}";
pub const MARK_WARNING_EMOJI: &str = "\u{26a0}\u{fe0f}";
pub const MARK_SUCCESS_PLAIN: &str = "OK";
pub const MARK_WARNING_PLAIN: &str = "WARNING";
