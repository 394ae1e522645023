//! End-to-end prompt flows through the public terminal API.
//!
//! Keystrokes come from in-memory byte sources; the input device and status
//! channel are local doubles so the tests never touch the real terminal.

use std::io;
use std::sync::{Arc, Mutex};
use termcue::error::TerminalError;
use termcue::terminal::{
    CharPrompt, InputDevice, InteractionMode, KeystrokeFeed, LiveTerminal, Terminal,
    TerminalCapabilities,
};
use termcue::ui::status::StatusSink;

#[derive(Debug, Default)]
struct RecordingDevice {
    changes: Mutex<Vec<&'static str>>,
}

impl RecordingDevice {
    fn changes(&self) -> Vec<&'static str> {
        self.changes.lock().unwrap().clone()
    }
}

impl InputDevice for RecordingDevice {
    fn is_interactive(&self) -> bool {
        true
    }

    fn set_echo(&self, enabled: bool) -> io::Result<()> {
        self.changes
            .lock()
            .unwrap()
            .push(if enabled { "echo on" } else { "echo off" });
        Ok(())
    }

    fn set_line_buffering(&self, enabled: bool) -> io::Result<()> {
        self.changes
            .lock()
            .unwrap()
            .push(if enabled { "lines on" } else { "lines off" });
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Transcript {
    text: Mutex<String>,
}

impl StatusSink for Transcript {
    fn status(&self, text: &str, _emphasis: bool, newline: bool) -> io::Result<()> {
        let mut out = self.text.lock().unwrap();
        out.push_str(text);
        if newline {
            out.push('\n');
        }
        Ok(())
    }
}

fn terminal(
    caps: TerminalCapabilities,
    ui_enabled: bool,
    input: &'static [u8],
) -> (LiveTerminal<RecordingDevice>, Arc<Transcript>) {
    let transcript = Arc::new(Transcript::default());
    let terminal = LiveTerminal::new(
        caps,
        ui_enabled,
        RecordingDevice::default(),
        Arc::new(KeystrokeFeed::from_reader(input)),
        transcript.clone(),
    );
    (terminal, transcript)
}

#[tokio::test]
async fn enter_accepts_default_choice() {
    let (terminal, transcript) = terminal(TerminalCapabilities::plain(), true, b"\n");
    let request = CharPrompt::new(["y", "n"])
        .with_prompt("Overwrite?")
        .with_default(0);

    let answer = terminal.prompt_for_char_input(&request).await.unwrap();

    assert_eq!(answer, "y");
    assert_eq!(transcript.text.lock().unwrap().as_str(), "Overwrite? [y|n]: \n");
    assert_eq!(
        terminal.raw_mode().device().changes(),
        vec!["echo off", "lines off", "lines on", "echo on"]
    );
    assert_eq!(terminal.raw_mode().mode(), InteractionMode::Cooperative);
}

#[tokio::test]
async fn rejected_key_reprompts_until_valid() {
    let (terminal, transcript) = terminal(TerminalCapabilities::plain(), true, b"xb");
    let request = CharPrompt::new(["a", "b", "c"]).with_prompt("Choose");

    let answer = terminal.prompt_for_char_input(&request).await.unwrap();

    assert_eq!(answer, "b");
    let text = transcript.text.lock().unwrap().clone();
    assert_eq!(text.matches("Choose [a|b|c]: ").count(), 2);
}

#[tokio::test]
async fn default_choice_is_bolded_when_color_is_supported() {
    let caps = TerminalCapabilities {
        supports_color: true,
        supports_emoji: true,
    };
    let (terminal, transcript) = terminal(caps, true, b"n");
    let request = CharPrompt::new(["y", "n"])
        .with_prompt("Keep?")
        .with_default(0);

    terminal.prompt_for_char_input(&request).await.unwrap();

    assert_eq!(
        transcript.text.lock().unwrap().as_str(),
        "Keep? [\x1b[1my\x1b[22m|n]: n\n"
    );
}

#[tokio::test]
async fn prompt_without_text_only_echoes_the_key() {
    let (terminal, transcript) = terminal(TerminalCapabilities::plain(), true, b"n");
    let answer = terminal
        .prompt_for_char_input(&CharPrompt::new(["y", "n"]).with_default(0))
        .await
        .unwrap();

    assert_eq!(answer, "n");
    assert_eq!(transcript.text.lock().unwrap().as_str(), "n\n");
}

#[tokio::test]
async fn multibyte_choice_is_decoded_from_raw_bytes() {
    let (terminal, _) = terminal(TerminalCapabilities::plain(), true, "ü".as_bytes());
    let answer = terminal
        .prompt_for_char_input(&CharPrompt::new(["ü", "u"]))
        .await
        .unwrap();
    assert_eq!(answer, "ü");
}

#[tokio::test]
async fn disabled_ui_is_invalid_state() {
    let (terminal, transcript) = terminal(TerminalCapabilities::plain(), false, b"y");
    let err = terminal
        .prompt_for_char_input(&CharPrompt::new(["y"]).with_prompt("Go?"))
        .await
        .unwrap_err();

    assert!(matches!(err, TerminalError::InvalidState(_)), "got: {err}");
    assert!(transcript.text.lock().unwrap().is_empty());
    assert!(terminal.raw_mode().device().changes().is_empty());
}

#[tokio::test]
async fn exhausted_input_restores_cooperative_mode() {
    let (terminal, _) = terminal(TerminalCapabilities::plain(), true, b"zzz");
    let err = terminal
        .prompt_for_char_input(&CharPrompt::new(["y", "n"]))
        .await
        .unwrap_err();

    assert!(matches!(err, TerminalError::InputClosed), "got: {err}");
    assert_eq!(terminal.raw_mode().mode(), InteractionMode::Cooperative);
    assert_eq!(
        terminal.raw_mode().device().changes().last().copied(),
        Some("echo on")
    );
}
