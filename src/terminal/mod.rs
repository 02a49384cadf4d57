//! Terminal access: raw mode, bounded reads, frame writes and geometry.
//!
//! Everything above this module talks to the terminal through the
//! [`TerminalIo`] trait, so the editor cycle can be driven by a scripted
//! terminal in tests and by [`Tty`] in the binary.

mod queries;
mod raw;

pub use queries::{CursorPositionReport, MAX_REPORT_LENGTH};
pub use raw::{
    READ_TIMEOUT_DECISECONDS, RawModeGuard, enable_raw_mode, is_tty, read_fd, restore_saved_mode,
    window_size, write_fd,
};

use crate::ansi::sequences;
use crate::error::{Error, Result};
use std::io::{self, Write};

/// Byte-level terminal interface used by the editor cycle.
pub trait TerminalIo: Write {
    /// Read a single byte, waiting no longer than the raw-mode timeout.
    ///
    /// Returns `Ok(None)` when the timeout elapsed with nothing to read.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Ask the terminal driver for its geometry as `(rows, cols)`.
    ///
    /// `None` means the direct query is unavailable and the cursor-report
    /// fallback should be used.
    fn direct_window_size(&self) -> Option<(u16, u16)>;
}

/// Discover the window size as `(rows, cols)`.
///
/// Tries the direct query first, then moves the cursor to the bottom-right
/// corner and asks the terminal to report where it ended up.
pub fn query_window_size<T: TerminalIo + ?Sized>(term: &mut T) -> Result<(u16, u16)> {
    if let Some(size) = term.direct_window_size() {
        tracing::debug!(rows = size.0, cols = size.1, "window size from ioctl");
        return Ok(size);
    }

    term.write_all(sequences::CURSOR_FAR_BOTTOM_RIGHT.as_bytes())
        .and_then(|()| term.write_all(sequences::query::CURSOR_POSITION.as_bytes()))
        .and_then(|()| term.flush())
        .map_err(|e| Error::terminal("write", e))?;

    let mut report = Vec::with_capacity(MAX_REPORT_LENGTH);
    while report.len() < MAX_REPORT_LENGTH {
        match term.read_byte().map_err(|e| Error::terminal("read", e))? {
            Some(b'R') => break,
            Some(b) => report.push(b),
            None => break,
        }
    }

    let parsed = CursorPositionReport::parse(&report).ok_or(Error::WindowSize)?;
    tracing::debug!(
        rows = parsed.row,
        cols = parsed.col,
        "window size from cursor position report"
    );
    Ok((parsed.row, parsed.col))
}

/// The controlling terminal: stdin in raw mode plus unbuffered stdout.
#[derive(Debug)]
pub struct Tty {
    guard: Option<RawModeGuard>,
}

impl Tty {
    /// Put stdin into raw mode.
    pub fn open() -> Result<Self> {
        let guard = enable_raw_mode()?;
        Ok(Self { guard: Some(guard) })
    }

    /// Restore the original terminal mode. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if let Some(guard) = self.guard.take() {
            guard.restore()?;
        }
        Ok(())
    }
}

impl Write for Tty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_fd(libc::STDOUT_FILENO, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TerminalIo for Tty {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match read_fd(libc::STDIN_FILENO, &mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            // Some platforms report the VTIME expiry as EAGAIN.
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn direct_window_size(&self) -> Option<(u16, u16)> {
        window_size().ok()
    }
}
