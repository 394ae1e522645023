//! termcue: terminal capabilities, ANSI styling and single-key prompts.
//!
//! The crate detects whether the attached terminal renders color and emoji,
//! styles multi-line text with nesting-safe ANSI codes, and runs
//! interactive single-keystroke prompts with guaranteed restoration of the
//! input mode.
//!
//! # Quick start
//!
//! ```no_run
//! use termcue::config::load_config;
//! use termcue::terminal::{CharPrompt, LiveTerminal, Terminal};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let terminal = LiveTerminal::stdio(&config.ui);
//! let answer = terminal
//!     .prompt_for_char_input(&CharPrompt::new(["y", "n"]).with_prompt("Continue?").with_default(0))
//!     .await?;
//! println!("{}", terminal.bolden(&answer));
//! # Ok(())
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod platform;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
