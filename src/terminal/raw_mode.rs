//! Single-character input mode: echo and line-buffering toggles.
//!
//! Entering raw mode disables echo first and line buffering second; leaving
//! it re-enables them in reverse order. Some platforms drop the echo change
//! when the order is swapped, so the sequence is part of the contract.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Byte-oriented input device that may support mode changes.
pub trait InputDevice: Send + Sync {
    /// True when the device is an interactive terminal.
    fn is_interactive(&self) -> bool;
    /// Enable or disable local echo of typed characters.
    fn set_echo(&self, enabled: bool) -> io::Result<()>;
    /// Enable or disable line-buffered (canonical) input.
    fn set_line_buffering(&self, enabled: bool) -> io::Result<()>;
}

/// Current input discipline of the controlled device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Line-buffered input with echo, as the shell left it.
    #[default]
    Cooperative,
    /// Unbuffered single-character reads without echo.
    RawSingleChar,
}

/// Owns the interaction mode of one input device.
///
/// Callers must not run two prompts against the same controller at once;
/// interleaved enter/exit calls leave the device in an arbitrary mode.
#[derive(Debug)]
pub struct RawModeController<D> {
    device: D,
    mode: Mutex<InteractionMode>,
}

impl<D: InputDevice> RawModeController<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            mode: Mutex::new(InteractionMode::Cooperative),
        }
    }

    /// The controlled device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Last mode successfully applied to the device.
    pub fn mode(&self) -> InteractionMode {
        *lock(&self.mode)
    }

    /// Enter (`true`) or leave (`false`) single-character mode.
    ///
    /// Non-interactive devices are left alone, and device failures are
    /// logged and swallowed so prompts degrade to line-based input.
    pub fn set_single_char_mode(&self, enabled: bool) {
        if !self.device.is_interactive() {
            debug!(enabled, "input is not a terminal; raw mode unchanged");
            return;
        }
        let applied = if enabled {
            self.enter_raw()
        } else {
            self.leave_raw()
        };
        match applied {
            Ok(mode) => {
                debug!(?mode, "input mode changed");
                *lock(&self.mode) = mode;
            }
            Err(e) => warn!(enabled, error = %e, "input device rejected mode change"),
        }
    }

    fn enter_raw(&self) -> io::Result<InteractionMode> {
        self.device.set_echo(false)?;
        if let Err(e) = self.device.set_line_buffering(false) {
            // Leave the device as we found it.
            let _ = self.device.set_echo(true);
            return Err(e);
        }
        Ok(InteractionMode::RawSingleChar)
    }

    fn leave_raw(&self) -> io::Result<InteractionMode> {
        self.device.set_line_buffering(true)?;
        self.device.set_echo(true)?;
        Ok(InteractionMode::Cooperative)
    }
}

/// Scoped single-character mode, restored to cooperative mode on drop.
pub struct RawModeGuard<'a, D: InputDevice> {
    controller: &'a RawModeController<D>,
}

impl<'a, D: InputDevice> RawModeGuard<'a, D> {
    /// Enter single-character mode and return a guard that leaves it on drop.
    pub fn acquire(controller: &'a RawModeController<D>) -> Self {
        controller.set_single_char_mode(true);
        Self { controller }
    }
}

impl<D: InputDevice> Drop for RawModeGuard<'_, D> {
    fn drop(&mut self) {
        self.controller.set_single_char_mode(false);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Process stdin
// ---------------------------------------------------------------------------

/// The process standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinDevice;

impl InputDevice for StdinDevice {
    fn is_interactive(&self) -> bool {
        use std::io::IsTerminal;
        io::stdin().is_terminal()
    }

    fn set_echo(&self, enabled: bool) -> io::Result<()> {
        sys::set_echo(enabled)
    }

    fn set_line_buffering(&self, enabled: bool) -> io::Result<()> {
        sys::set_line_buffering(enabled)
    }
}

#[cfg(unix)]
mod sys {
    use std::io;
    use std::mem::MaybeUninit;

    pub(super) fn set_echo(enabled: bool) -> io::Result<()> {
        update_local_flag(libc::ECHO, enabled)
    }

    pub(super) fn set_line_buffering(enabled: bool) -> io::Result<()> {
        update_local_flag(libc::ICANON, enabled)
    }

    fn update_local_flag(flag: libc::tcflag_t, enabled: bool) -> io::Result<()> {
        let fd = libc::STDIN_FILENO;
        let mut raw = MaybeUninit::<libc::termios>::uninit();
        // SAFETY: `raw` is valid for writes and tcgetattr fills it on success.
        if unsafe { libc::tcgetattr(fd, raw.as_mut_ptr()) } != 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: tcgetattr returned 0, so `raw` is initialized.
        let mut termios = unsafe { raw.assume_init() };
        if enabled {
            termios.c_lflag |= flag;
        } else {
            termios.c_lflag &= !flag;
        }
        if flag == libc::ICANON && !enabled {
            // Block until exactly one byte is available.
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;
        }
        // SAFETY: `termios` is a fully initialized value for this descriptor.
        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(windows)]
mod sys {
    use crossterm::terminal;
    use std::io;

    // Console raw mode also drops echo, so echo has no separate switch.
    pub(super) fn set_echo(_enabled: bool) -> io::Result<()> {
        Ok(())
    }

    pub(super) fn set_line_buffering(enabled: bool) -> io::Result<()> {
        if enabled {
            terminal::disable_raw_mode()
        } else {
            terminal::enable_raw_mode()
        }
    }
}

#[cfg(not(any(unix, windows)))]
mod sys {
    use std::io;

    pub(super) fn set_echo(_enabled: bool) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no terminal control"))
    }

    pub(super) fn set_line_buffering(_enabled: bool) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no terminal control"))
    }
}
