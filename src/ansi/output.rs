//! Frame accumulation buffer.
//!
//! Every byte of a frame is collected here and handed to the terminal in a
//! single write, so the terminal never shows a half-drawn screen.

use crate::ansi::{self, sequences};
use std::io::{self, Write};

/// Buffered frame writer.
#[derive(Debug, Default)]
pub struct FrameWriter {
    buffer: Vec<u8>,
}

impl FrameWriter {
    /// Create an empty frame writer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(8192),
        }
    }

    /// Write raw bytes to the buffer.
    pub fn write_raw(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Append `count` copies of a byte.
    pub fn pad(&mut self, byte: u8, count: usize) {
        self.buffer.resize(self.buffer.len() + count, byte);
    }

    /// Move the cursor to an absolute 0-indexed position.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
    }

    pub fn hide_cursor(&mut self) {
        self.write_str(sequences::CURSOR_HIDE);
    }

    pub fn show_cursor(&mut self) {
        self.write_str(sequences::CURSOR_SHOW);
    }

    pub fn cursor_home(&mut self) {
        self.write_str(sequences::CURSOR_HOME);
    }

    pub fn clear_screen(&mut self) {
        self.write_str(sequences::CLEAR_SCREEN);
    }

    /// Erase from the cursor to the end of the current line.
    pub fn clear_line_right(&mut self) {
        self.write_str(sequences::CLEAR_LINE_RIGHT);
    }

    pub fn inverse_on(&mut self) {
        self.write_str(sequences::INVERSE_ON);
    }

    pub fn inverse_off(&mut self) {
        self.write_str(sequences::INVERSE_OFF);
    }

    pub fn newline(&mut self) {
        self.write_str(sequences::NEWLINE);
    }

    /// Write the whole frame to `out` in one call and clear the buffer.
    pub fn present<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        let result = out.write_all(&self.buffer).and_then(|()| out.flush());
        self.buffer.clear();
        result
    }

    /// Get a reference to the buffer.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer without presenting it.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}
