//! Scripted terminal for driving the editor without a real TTY.
//!
//! [`MockTerminal`] implements `TerminalIo`: reads come from a script of
//! bytes and explicit timeouts, writes are captured for inspection. Once the
//! script runs out, reads fail with `UnexpectedEof` so a cycle that keeps
//! reading ends instead of spinning.

use kilo_rust::TerminalIo;
use std::collections::VecDeque;
use std::io::{self, Write};

/// A mock terminal with scripted input and captured output.
///
/// # Example
///
/// ```ignore
/// let mut term = MockTerminal::new(24, 80);
/// term.push_bytes(b"hello").push_timeout();
/// ```
pub struct MockTerminal {
    /// `None` entries are read timeouts.
    input: VecDeque<Option<u8>>,
    output: Vec<u8>,
    writes: usize,
    /// Terminal height.
    pub rows: u16,
    /// Terminal width.
    pub cols: u16,
    /// Whether the ioctl-style size query answers.
    direct_size: bool,
    write_enabled: bool,
}

impl MockTerminal {
    /// Create a terminal whose direct geometry query reports `rows x cols`.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::with_capacity(4096),
            writes: 0,
            rows,
            cols,
            direct_size: true,
            write_enabled: true,
        }
    }

    /// Create a terminal without direct geometry; the cursor report
    /// `ESC [ rows ; cols R` is queued as input instead.
    pub fn with_cursor_report(rows: u16, cols: u16) -> Self {
        let mut term = Self::new(rows, cols);
        term.direct_size = false;
        term.push_bytes(format!("\x1b[{rows};{cols}R").as_bytes());
        term
    }

    /// Queue input bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.input.extend(bytes.iter().copied().map(Some));
        self
    }

    /// Queue one read timeout.
    pub fn push_timeout(&mut self) -> &mut Self {
        self.input.push_back(None);
        self
    }

    /// Queue a lone ESC key (ESC followed by a timeout).
    pub fn push_esc(&mut self) -> &mut Self {
        self.push_bytes(b"\x1b").push_timeout()
    }

    /// Make subsequent writes fail (simulates a broken terminal).
    pub fn disable_writes(&mut self) {
        self.write_enabled = false;
    }

    /// Get the captured output.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Get the captured output as a string (lossy UTF-8 conversion).
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Number of `write` calls seen.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Clear the captured output and write counter.
    pub fn clear_output(&mut self) {
        self.output.clear();
        self.writes = 0;
    }

    /// Check if a specific sequence is present in output.
    pub fn contains_sequence(&self, seq: &[u8]) -> bool {
        self.output.windows(seq.len()).any(|window| window == seq)
    }

    /// Interpret everything written so far as a real terminal would.
    pub fn screen(&self) -> vt100::Parser {
        let mut parser = vt100::Parser::new(self.rows, self.cols, 0);
        parser.process(&self.output);
        parser
    }

    /// Screen rows as text with trailing blanks trimmed.
    pub fn screen_rows(&self) -> Vec<String> {
        self.screen()
            .screen()
            .rows(0, self.cols)
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    /// Cursor position as `(row, col)`, 0-indexed.
    pub fn cursor(&self) -> (u16, u16) {
        self.screen().screen().cursor_position()
    }
}

impl Write for MockTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.write_enabled {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "writes disabled"));
        }
        self.writes += 1;
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TerminalIo for MockTerminal {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.input.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }

    fn direct_window_size(&self) -> Option<(u16, u16)> {
        self.direct_size.then_some((self.rows, self.cols))
    }
}
