//! Single-keystroke prompt loop.

use crate::error::TerminalError;
use crate::terminal::keystrokes::Keystrokes;
use crate::terminal::raw_mode::{InputDevice, RawModeController, RawModeGuard};
use crate::terminal::settings;
use crate::terminal::style::bolden;
use crate::ui::status::StatusSink;
use tracing::debug;

/// Arguments for one single-character prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPrompt {
    accepted: Vec<String>,
    prompt: Option<String>,
    default_index: Option<usize>,
    display_accepted: bool,
}

impl CharPrompt {
    /// Prompt accepting exactly the given characters.
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
            prompt: None,
            default_index: None,
            display_accepted: true,
        }
    }

    /// Text written before the choice list.
    ///
    /// Without prompt text nothing is written ahead of the keystroke: no
    /// choice list and no `: ` suffix, only the echoed key.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Index of the choice selected by a bare line feed.
    pub fn with_default(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    /// Whether to show `[a|b|c]` after the prompt text.
    pub fn display_accepted(mut self, display: bool) -> Self {
        self.display_accepted = display;
        self
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Check caller-supplied arguments before any terminal state changes.
    pub fn validate(&self) -> Result<(), TerminalError> {
        if self.accepted.is_empty() {
            return Err(TerminalError::Precondition(
                "at least one accepted character is required".into(),
            ));
        }
        if let Some(bad) = self.accepted.iter().find(|c| c.chars().count() != 1) {
            return Err(TerminalError::Precondition(format!(
                "accepted entry {bad:?} is not a single character"
            )));
        }
        if self.prompt.as_deref().is_some_and(str::is_empty) {
            return Err(TerminalError::Precondition(
                "prompt text must not be empty".into(),
            ));
        }
        if let Some(index) = self.default_index {
            if index >= self.accepted.len() {
                return Err(TerminalError::Precondition(format!(
                    "default choice index {index} is out of range for {} accepted characters",
                    self.accepted.len()
                )));
            }
        }
        Ok(())
    }
}

/// Per-invocation state derived from a validated [`CharPrompt`].
#[derive(Debug)]
struct PromptSession {
    accepted: Vec<String>,
    default_choice: Option<String>,
    display: Vec<String>,
}

impl PromptSession {
    fn new(request: &CharPrompt, color: bool) -> Self {
        let default_choice = request
            .default_index
            .and_then(|index| request.accepted.get(index).cloned());
        let display = request
            .accepted
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                if request.default_index == Some(index) {
                    bolden(color, choice)
                } else {
                    choice.clone()
                }
            })
            .collect();
        let mut accepted = request.accepted.clone();
        if default_choice.is_some() {
            accepted.push(settings::LINE_FEED.to_string());
        }
        Self {
            accepted,
            default_choice,
            display,
        }
    }

    fn choices_text(&self) -> String {
        format!(
            "{}{}{}",
            settings::CHOICES_OPEN,
            self.display.join(settings::CHOICES_SEPARATOR),
            settings::CHOICES_CLOSE
        )
    }

    fn accepts(&self, key: &str) -> bool {
        key.chars().count() == 1 && self.accepted.iter().any(|choice| choice == key)
    }

    /// Map the line-feed synonym back to the default character.
    fn resolve(&self, key: String) -> String {
        match &self.default_choice {
            Some(default) if is_line_feed(&key) => default.clone(),
            _ => key,
        }
    }
}

fn is_line_feed(key: &str) -> bool {
    key.len() == 1 && key.starts_with(settings::LINE_FEED)
}

/// Drive one prompt to completion.
///
/// `request` must already be validated. Single-character mode is held only
/// for the duration of the loop and released on every exit path.
pub(crate) async fn run_char_prompt<D: InputDevice>(
    raw_mode: &RawModeController<D>,
    keys: &mut Keystrokes,
    status: &dyn StatusSink,
    color: bool,
    request: &CharPrompt,
) -> Result<String, TerminalError> {
    let session = PromptSession::new(request, color);
    let guard = RawModeGuard::acquire(raw_mode);

    let mut attempts = 0usize;
    let key = loop {
        attempts += 1;
        write_prompt_line(status, request, &session)?;
        let key = keys.next().await.ok_or(TerminalError::InputClosed)?;
        if is_line_feed(&key) {
            status.status("", false, true)?;
        } else {
            status.status(&key, false, true)?;
        }
        if session.accepts(&key) {
            break key;
        }
        debug!(attempts, key = ?key, "rejected keystroke");
    };

    drop(guard);
    Ok(session.resolve(key))
}

fn write_prompt_line(
    status: &dyn StatusSink,
    request: &CharPrompt,
    session: &PromptSession,
) -> std::io::Result<()> {
    let Some(prompt) = &request.prompt else {
        return Ok(());
    };
    status.status(prompt, true, false)?;
    if request.display_accepted {
        status.status(settings::PROMPT_SPACER, false, false)?;
        status.status(&session.choices_text(), false, false)?;
    }
    status.status(settings::PROMPT_SUFFIX, true, false)
}
