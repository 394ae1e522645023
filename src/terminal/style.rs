//! ANSI bold/color styling for multi-line text.
//!
//! Every function takes the color-support flag explicitly and returns the
//! input untouched when styling is off, so output written to pipes and
//! snapshot files stays byte-for-byte plain.

use crate::terminal::capabilities::TerminalCapabilities;
use crate::terminal::settings;
use std::fmt;
use std::str::FromStr;

/// Foreground colors with a fixed escape code each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
    Grey,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::Grey,
    ];

    /// Escape sequence that switches the foreground to this color.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => settings::CODE_RED,
            Self::Green => settings::CODE_GREEN,
            Self::Blue => settings::CODE_BLUE,
            Self::Cyan => settings::CODE_CYAN,
            Self::Yellow => settings::CODE_YELLOW,
            Self::Magenta => settings::CODE_MAGENTA,
            Self::Grey => settings::CODE_GREY,
        }
    }

    /// Lowercase name used by config and CLI surfaces.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Grey => "grey",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        // Accept the American spelling alongside the canonical one.
        let wanted = if wanted == "gray" { "grey".to_string() } else { wanted };
        Self::ALL
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|c| c.name()).collect();
                format!("unknown color `{s}` (expected one of: {})", names.join(", "))
            })
    }
}

/// Wrap every line of `text` in bold-on/bold-off.
///
/// Existing bold codes are stripped first so an embedded bold-off cannot
/// end the outer bold early. Re-bolding leaves the bytes unchanged unless
/// the text ends with a line feed, which gains one more empty bold line.
pub fn bolden(color: bool, text: &str) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    map_lines(text, |line, out| {
        let cleaned = line
            .replace(settings::BOLD_ON, "")
            .replace(settings::BOLD_OFF, "");
        out.push_str(settings::BOLD_ON);
        out.push_str(&cleaned);
        out.push_str(settings::BOLD_OFF);
    })
}

/// Wrap every line of `text` in `tint` and a trailing color-off.
///
/// A color-off already inside the line is rewritten to resume `tint`, so
/// a nested colored span hands control back to the enclosing color.
pub fn colorize(color: bool, text: &str, tint: Option<Color>) -> String {
    let Some(tint) = tint else {
        return text.to_string();
    };
    if !color || text.is_empty() {
        return text.to_string();
    }
    let code = tint.code();
    let resume = format!("{}{code}", settings::COLOR_OFF);
    map_lines(text, |line, out| {
        out.push_str(code);
        out.push_str(&line.replace(settings::COLOR_OFF, &resume));
        out.push_str(settings::COLOR_OFF);
    })
}

/// Sequence that clears the screen and homes the cursor.
pub fn clear_screen(color: bool) -> &'static str {
    if color {
        settings::CLEAR_SCREEN
    } else {
        settings::CLEAR_SCREEN_FALLBACK
    }
}

/// Mark prefixed to success messages.
pub fn success_mark(caps: TerminalCapabilities) -> String {
    status_mark(
        caps,
        settings::MARK_SUCCESS_EMOJI,
        settings::MARK_SUCCESS_PLAIN,
        Color::Green,
    )
}

/// Mark prefixed to warning messages.
pub fn warning_mark(caps: TerminalCapabilities) -> String {
    status_mark(
        caps,
        settings::MARK_WARNING_EMOJI,
        settings::MARK_WARNING_PLAIN,
        Color::Yellow,
    )
}

fn status_mark(caps: TerminalCapabilities, emoji: &str, plain: &str, tint: Color) -> String {
    if caps.supports_emoji {
        return emoji.to_string();
    }
    let color = caps.supports_color;
    bolden(color, &colorize(color, plain, Some(tint)))
}

/// Apply `style` to every line between line feeds, including the empty
/// line after a trailing one. A line feed follows each styled line except
/// the last, unless `text` itself ended with one.
fn map_lines<F>(text: &str, mut style: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let mut out = String::with_capacity(text.len() + 16);
    for line in text.split(settings::LINE_FEED) {
        style(line, &mut out);
        out.push(settings::LINE_FEED);
    }
    if !text.ends_with(settings::LINE_FEED) {
        out.pop();
    }
    out
}
