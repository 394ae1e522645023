//! CLI entry point for termcue.

mod cli;

use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use termcue::config::{load_config, Toggle};
use termcue::platform::PlatformFacts;
use termcue::terminal::{
    CharPrompt, LiveTerminal, NoUiTerminal, Terminal, TerminalCapabilities,
};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TERMCUE_LOG";

#[tokio::main]
async fn main() {
    init_logging();
    let args = cli::Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if args.no_color {
        config.ui.color = Toggle::Never;
    }

    let terminal: Arc<dyn Terminal> = if args.no_ui {
        let detected = TerminalCapabilities::from_facts(&PlatformFacts::detect());
        Arc::new(NoUiTerminal::new(config.ui.capabilities(detected)))
    } else {
        Arc::new(LiveTerminal::stdio(&config.ui))
    };

    if let Err(e) = run(args.command, terminal.as_ref()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(
    command: cli::Command,
    terminal: &dyn Terminal,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout().lock();
    match command {
        cli::Command::Caps => {
            let caps = terminal.capabilities();
            writeln!(stdout, "color: {}", caps.supports_color)?;
            writeln!(stdout, "emoji: {}", caps.supports_emoji)?;
        }
        cli::Command::Style { text, bold, color } => {
            let mut styled = terminal.colorize(&text, color);
            if bold {
                styled = terminal.bolden(&styled);
            }
            writeln!(stdout, "{styled}")?;
        }
        cli::Command::Clear => {
            write!(stdout, "{}", terminal.clear_screen())?;
            stdout.flush()?;
        }
        cli::Command::Ask {
            choices,
            prompt,
            default,
            hide_choices,
        } => {
            drop(stdout);
            let mut request =
                CharPrompt::new(choices.chars().map(String::from)).display_accepted(!hide_choices);
            if let Some(prompt) = prompt {
                request = request.with_prompt(prompt);
            }
            if let Some(index) = default {
                request = request.with_default(index);
            }
            let answer = terminal.prompt_for_char_input(&request).await?;
            println!("{answer}");
        }
    }
    Ok(())
}

/// Install a stderr log subscriber filtered by `TERMCUE_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
