//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use termcue::build_info;
use termcue::terminal::Color;

/// Inspect terminal capabilities, style text and ask single-key questions.
#[derive(Debug, Parser)]
#[command(name = "termcue", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./termcue.toml or ~/.config/termcue/termcue.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Use the non-interactive terminal (prompts fail instead of reading input).
    #[arg(long = "no-ui", global = true)]
    pub no_ui: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved color and emoji support.
    Caps,
    /// Print text with bold and/or color applied.
    Style {
        /// Text to style; may contain line breaks.
        text: String,
        #[arg(short = 'b', long = "bold")]
        bold: bool,
        /// One of red, green, blue, cyan, yellow, magenta, grey.
        #[arg(long = "color")]
        color: Option<Color>,
    },
    /// Clear the screen.
    Clear,
    /// Ask for a single keystroke out of the given characters.
    Ask {
        /// Accepted characters, e.g. `yn`.
        choices: String,
        /// Question shown before the choices; without it only the key is echoed.
        #[arg(short = 'p', long = "prompt")]
        prompt: Option<String>,
        /// Index of the choice selected by pressing Enter.
        #[arg(short = 'd', long = "default")]
        default: Option<usize>,
        /// Do not list the accepted characters.
        #[arg(long = "hide-choices")]
        hide_choices: bool,
    },
}
