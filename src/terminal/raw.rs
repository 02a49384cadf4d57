//! Raw mode terminal handling.
//!
//! Provides functions to enter and exit raw mode on Unix terminals using termios.
//! Raw mode disables terminal line buffering and echo, allowing character-by-character
//! input reading.
//!
//! # Safety
//! This module uses unsafe code for FFI calls to libc termios functions.
//! These are necessary for low-level terminal control and cannot be avoided.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use crate::error::{Error, Result};
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};
use std::sync::{Mutex, OnceLock};

/// Read timeout in tenths of a second (`VTIME`).
pub const READ_TIMEOUT_DECISECONDS: libc::cc_t = 1;

/// Mode saved by the most recent guard, for restoration from a panic hook.
fn saved_mode() -> &'static Mutex<Option<(RawFd, libc::termios)>> {
    static SAVED: OnceLock<Mutex<Option<(RawFd, libc::termios)>>> = OnceLock::new();
    SAVED.get_or_init(|| Mutex::new(None))
}

/// Saved terminal state for restoration.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Enter raw mode on the given file descriptor.
    ///
    /// Returns a guard that will restore the terminal state when dropped.
    /// A failure names the termios call that reported it.
    pub fn new<F: AsRawFd>(fd: &F) -> Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd).map_err(|e| Error::terminal("tcgetattr", e))?;

        set_termios(fd, &raw_termios(original)).map_err(|e| Error::terminal("tcsetattr", e))?;

        if let Ok(mut saved) = saved_mode().lock() {
            *saved = Some((fd, original));
        }
        tracing::debug!(fd, "entered raw mode");

        Ok(Self { fd, original })
    }

    /// Restore the original terminal state.
    pub fn restore(&self) -> Result<()> {
        set_termios(self.fd, &self.original).map_err(|e| Error::terminal("tcsetattr", e))?;
        if let Ok(mut saved) = saved_mode().lock() {
            *saved = None;
        }
        tracing::debug!(fd = self.fd, "restored terminal mode");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Derive raw settings from the original ones.
fn raw_termios(original: libc::termios) -> libc::termios {
    let mut raw = original;

    // Input modes: no break, no CR to NL, no parity check, no strip char,
    // no start/stop output control.
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);

    // Output modes: disable post processing
    raw.c_oflag &= !libc::OPOST;

    // Control modes: set 8 bit chars
    raw.c_cflag |= libc::CS8;

    // Local modes: echo off, canonical off, no extended functions,
    // no signal chars (^C, ^Z, etc)
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);

    // Return as soon as any byte is available, or after the timeout with none.
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = READ_TIMEOUT_DECISECONDS;

    raw
}

/// Enter raw mode for stdin.
///
/// Returns a guard that restores the terminal when dropped.
pub fn enable_raw_mode() -> Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin())
}

/// Restore whatever mode the live guard saved, if any.
///
/// Used on paths where the guard's destructor will not run (panic with
/// `panic = "abort"`, explicit `process::exit`).
pub fn restore_saved_mode() {
    let saved = match saved_mode().lock() {
        Ok(mut saved) => saved.take(),
        Err(_) => None,
    };
    if let Some((fd, original)) = saved {
        let _ = set_termios(fd, &original);
    }
}

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Get the terminal size as `(rows, cols)` via `TIOCGWINSZ`.
///
/// A zero column count is reported as an error so callers fall back to the
/// cursor-position strategy.
pub fn window_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero columns",
        ))
    } else {
        Ok((size.ws_row, size.ws_col))
    }
}

/// Unbuffered `read(2)`; with raw mode's `VMIN = 0` this returns `Ok(0)` on timeout.
pub fn read_fd(fd: RawFd, buf: &mut [u8]) -> io::Result<usize> {
    // SAFETY: buf is a valid writable region of buf.len() bytes
    let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
    if n < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(n as usize)
    }
}

/// Unbuffered `write(2)`.
pub fn write_fd(fd: RawFd, buf: &[u8]) -> io::Result<usize> {
    // SAFETY: buf is a valid readable region of buf.len() bytes
    let n = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
    if n < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(n as usize)
    }
}

/// Get termios attributes.
fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

/// Set termios attributes.
fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
