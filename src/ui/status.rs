//! Status output channel used for prompt and echo text.
//!
//! Prompts never write to stderr directly. They go through `StatusSink` so
//! harnesses and embedding applications can capture or redirect the text.

use crate::terminal::settings;
use crate::terminal::style::bolden;
use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Receiver for user-facing status text.
pub trait StatusSink: Send + Sync {
    /// Write `text`, bolded when `emphasis` is set, with an optional line break.
    fn status(&self, text: &str, emphasis: bool, newline: bool) -> io::Result<()>;
}

/// Status sink writing to the process stderr.
#[derive(Debug, Clone, Copy)]
pub struct StderrStatus {
    color: bool,
}

impl StderrStatus {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl StatusSink for StderrStatus {
    fn status(&self, text: &str, emphasis: bool, newline: bool) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        write_status(&mut stderr, self.color, text, emphasis, newline)
    }
}

/// Queue one status fragment and flush it so partial lines show up at once.
pub(crate) fn write_status<W>(
    out: &mut W,
    color: bool,
    text: &str,
    emphasis: bool,
    newline: bool,
) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if emphasis {
        out.queue(Print(bolden(color, text)))?;
    } else {
        out.queue(Print(text))?;
    }
    if newline {
        out.queue(Print(settings::LINE_FEED))?;
    }
    out.flush()
}
