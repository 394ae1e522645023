//! Terminal capability abstraction.
//!
//! Callers pick a variant at construction time: [`LiveTerminal`] drives a
//! real input device, [`NoUiTerminal`] renders styled text but refuses to
//! prompt. Both expose the same [`Terminal`] contract so orchestration code
//! and tests never inspect which one they hold.

pub mod capabilities;
pub mod keystrokes;
pub mod prompt;
pub mod raw_mode;
pub mod settings;
pub mod style;

pub use capabilities::TerminalCapabilities;
pub use keystrokes::{Keystroke, KeystrokeFeed, Keystrokes};
pub use prompt::CharPrompt;
pub use raw_mode::{InputDevice, InteractionMode, RawModeController, StdinDevice};
pub use style::Color;

use crate::config::UiConfig;
use crate::error::TerminalError;
use crate::platform::PlatformFacts;
use crate::ui::status::{StatusSink, StderrStatus};
use async_trait::async_trait;
use std::sync::Arc;

/// Styling, raw-mode and prompting surface shared by every terminal variant.
#[async_trait]
pub trait Terminal: Send + Sync {
    /// Resolved rendering capabilities.
    fn capabilities(&self) -> TerminalCapabilities;

    /// Enter or leave single-character input mode.
    fn set_single_char_mode(&self, enabled: bool);

    /// Block until the user types one of the accepted characters.
    ///
    /// Only one prompt may be active per terminal at a time; concurrent
    /// prompts interleave raw-mode toggles and are not guarded against.
    async fn prompt_for_char_input(&self, request: &CharPrompt) -> Result<String, TerminalError>;

    fn bolden(&self, text: &str) -> String {
        style::bolden(self.capabilities().supports_color, text)
    }

    fn colorize(&self, text: &str, color: Option<Color>) -> String {
        style::colorize(self.capabilities().supports_color, text, color)
    }

    fn clear_screen(&self) -> &'static str {
        style::clear_screen(self.capabilities().supports_color)
    }

    fn success_mark(&self) -> String {
        style::success_mark(self.capabilities())
    }

    fn warning_mark(&self) -> String {
        style::warning_mark(self.capabilities())
    }
}

// ---------------------------------------------------------------------------
// LiveTerminal
// ---------------------------------------------------------------------------

/// Terminal backed by a real input device and keystroke feed.
pub struct LiveTerminal<D = StdinDevice> {
    caps: TerminalCapabilities,
    ui_enabled: bool,
    raw_mode: RawModeController<D>,
    feed: Arc<KeystrokeFeed>,
    status: Arc<dyn StatusSink>,
}

impl LiveTerminal<StdinDevice> {
    /// Terminal over the process stdin/stderr, configured from `config`.
    pub fn stdio(config: &UiConfig) -> Self {
        let detected = TerminalCapabilities::from_facts(&PlatformFacts::detect());
        let caps = config.capabilities(detected);
        Self::new(
            caps,
            config.enabled,
            StdinDevice,
            KeystrokeFeed::shared(),
            Arc::new(StderrStatus::new(caps.supports_color)),
        )
    }
}

impl<D: InputDevice> LiveTerminal<D> {
    pub fn new(
        caps: TerminalCapabilities,
        ui_enabled: bool,
        device: D,
        feed: Arc<KeystrokeFeed>,
        status: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            caps,
            ui_enabled,
            raw_mode: RawModeController::new(device),
            feed,
            status,
        }
    }

    pub fn raw_mode(&self) -> &RawModeController<D> {
        &self.raw_mode
    }

    pub fn ui_enabled(&self) -> bool {
        self.ui_enabled
    }
}

#[async_trait]
impl<D: InputDevice> Terminal for LiveTerminal<D> {
    fn capabilities(&self) -> TerminalCapabilities {
        self.caps
    }

    fn set_single_char_mode(&self, enabled: bool) {
        self.raw_mode.set_single_char_mode(enabled);
    }

    async fn prompt_for_char_input(&self, request: &CharPrompt) -> Result<String, TerminalError> {
        if !self.ui_enabled {
            return Err(TerminalError::InvalidState(
                "terminal UI is disabled".into(),
            ));
        }
        request.validate()?;
        let mut keys = self.feed.subscribe();
        prompt::run_char_prompt(
            &self.raw_mode,
            &mut keys,
            self.status.as_ref(),
            self.caps.supports_color,
            request,
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// NoUiTerminal
// ---------------------------------------------------------------------------

/// Non-interactive terminal: styles text, never reads input.
#[derive(Debug, Clone, Copy)]
pub struct NoUiTerminal {
    caps: TerminalCapabilities,
}

impl NoUiTerminal {
    pub fn new(caps: TerminalCapabilities) -> Self {
        Self { caps }
    }
}

impl Default for NoUiTerminal {
    fn default() -> Self {
        Self::new(TerminalCapabilities::plain())
    }
}

#[async_trait]
impl Terminal for NoUiTerminal {
    fn capabilities(&self) -> TerminalCapabilities {
        self.caps
    }

    fn set_single_char_mode(&self, _enabled: bool) {}

    async fn prompt_for_char_input(&self, _request: &CharPrompt) -> Result<String, TerminalError> {
        Err(TerminalError::Unsupported(
            "prompting requires an interactive terminal".into(),
        ))
    }
}
