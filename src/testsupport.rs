//! Shared test fixtures for terminal, prompt and capability tests.

use crate::platform::PlatformFacts;
use crate::terminal::raw_mode::InputDevice;
use crate::ui::status::StatusSink;
use std::io;
use std::sync::Mutex;

/// One mode change observed by [`ScriptedDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCall {
    Echo(bool),
    LineBuffering(bool),
}

/// Input device double that records every mode change.
#[derive(Debug)]
pub struct ScriptedDevice {
    interactive: bool,
    reject_echo: bool,
    reject_line_buffering: bool,
    calls: Mutex<Vec<DeviceCall>>,
}

impl ScriptedDevice {
    /// A terminal that accepts every mode change.
    pub fn interactive() -> Self {
        Self::build(true)
    }

    /// A pipe or file: not interactive.
    pub fn piped() -> Self {
        Self::build(false)
    }

    /// A terminal that rejects every mode change.
    pub fn rejecting() -> Self {
        Self {
            reject_echo: true,
            reject_line_buffering: true,
            ..Self::interactive()
        }
    }

    /// A terminal that toggles echo but cannot leave line-buffered input.
    pub fn rejecting_line_buffering() -> Self {
        Self {
            reject_line_buffering: true,
            ..Self::interactive()
        }
    }

    fn build(interactive: bool) -> Self {
        Self {
            interactive,
            reject_echo: false,
            reject_line_buffering: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Successful mode changes in the order they were applied.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DeviceCall) -> io::Result<()> {
        let rejected = match call {
            DeviceCall::Echo(_) => self.reject_echo,
            DeviceCall::LineBuffering(_) => self.reject_line_buffering,
        };
        if rejected {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "mode changes not supported",
            ));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl InputDevice for ScriptedDevice {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_echo(&self, enabled: bool) -> io::Result<()> {
        self.record(DeviceCall::Echo(enabled))
    }

    fn set_line_buffering(&self, enabled: bool) -> io::Result<()> {
        self.record(DeviceCall::LineBuffering(enabled))
    }
}

/// Status sink that keeps everything written to it.
#[derive(Debug, Default)]
pub struct CapturedStatus {
    buffer: Mutex<String>,
    emphasized: Mutex<Vec<String>>,
}

impl CapturedStatus {
    pub fn text(&self) -> String {
        self.buffer.lock().unwrap().clone()
    }

    /// Fragments written with emphasis, in order.
    pub fn emphasized(&self) -> Vec<String> {
        self.emphasized.lock().unwrap().clone()
    }
}

impl StatusSink for CapturedStatus {
    fn status(&self, text: &str, emphasis: bool, newline: bool) -> io::Result<()> {
        if emphasis {
            self.emphasized.lock().unwrap().push(text.to_string());
        }
        let mut buffer = self.buffer.lock().unwrap();
        buffer.push_str(text);
        if newline {
            buffer.push('\n');
        }
        Ok(())
    }
}

/// Builder for synthetic [`PlatformFacts`].
#[derive(Debug, Default)]
pub struct FactsBuilder {
    facts: PlatformFacts,
}

impl FactsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn windows(mut self, windows_like: bool) -> Self {
        self.facts.windows_like = windows_like;
        self
    }

    pub fn ansi(mut self, ansi_stdout: bool) -> Self {
        self.facts.ansi_stdout = ansi_stdout;
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.facts.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> PlatformFacts {
        self.facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_device_records_in_order() {
        let device = ScriptedDevice::interactive();
        device.set_echo(false).unwrap();
        device.set_line_buffering(false).unwrap();
        assert_eq!(
            device.calls(),
            vec![DeviceCall::Echo(false), DeviceCall::LineBuffering(false)]
        );
    }

    #[test]
    fn rejecting_device_records_nothing() {
        let device = ScriptedDevice::rejecting();
        assert!(device.set_echo(false).is_err());
        assert!(device.calls().is_empty());
    }

    #[test]
    fn line_buffering_rejection_leaves_echo_working() {
        let device = ScriptedDevice::rejecting_line_buffering();
        assert!(device.set_echo(false).is_ok());
        assert!(device.set_line_buffering(false).is_err());
        assert_eq!(device.calls(), vec![DeviceCall::Echo(false)]);
    }

    #[test]
    fn captured_status_appends_newlines() {
        let sink = CapturedStatus::default();
        sink.status("a", false, false).unwrap();
        sink.status("b", true, true).unwrap();
        assert_eq!(sink.text(), "ab\n");
        assert_eq!(sink.emphasized(), vec!["b"]);
    }
}
