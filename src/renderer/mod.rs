//! Frame composition.
//!
//! [`Renderer`] turns the editor state into one complete screen frame: the
//! visible text rows (or filler and banner), an inverse-video status bar and
//! a message bar. The whole frame is accumulated in a [`FrameWriter`] and
//! handed to the terminal in a single write with the cursor hidden, so the
//! user never sees a partially drawn screen.
//!
//! # Examples
//!
//! ```
//! use kilo_rust::renderer::{Cursor, Frame, Renderer, Viewport};
//! use kilo_rust::text::Document;
//!
//! let doc = Document::from_bytes(b"hello\n");
//! let mut viewport = Viewport::new(3, 20);
//! let cursor = Cursor::new(5, 0);
//! let rx = viewport.scroll_to_cursor(&doc, cursor);
//!
//! let mut renderer = Renderer::new();
//! let mut out = Vec::new();
//! renderer
//!     .render_frame(
//!         &Frame {
//!             document: &doc,
//!             viewport: &viewport,
//!             cursor,
//!             rx,
//!             filename: None,
//!             message: None,
//!             banner: "banner",
//!         },
//!         &mut out,
//!     )
//!     .unwrap();
//! assert!(out.ends_with(b"\x1b[1;6H\x1b[?25h"));
//! ```

mod viewport;

pub use viewport::{Cursor, Viewport};

use crate::ansi::FrameWriter;
use crate::text::Document;
use std::io::{self, Write};

/// Glyph drawn on rows past the end of the document.
pub const FILLER: u8 = b'~';

/// Name shown in the status bar when no file is associated.
pub const NO_NAME: &[u8] = b"[No Name]";

/// Longest filename prefix shown in the status bar.
const STATUS_NAME_LIMIT: usize = 20;

/// Everything needed to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub document: &'a Document,
    /// Viewport already scrolled to the cursor.
    pub viewport: &'a Viewport,
    pub cursor: Cursor,
    /// Rendered column of the cursor.
    pub rx: usize,
    pub filename: Option<&'a [u8]>,
    /// Status message, present only while it is still visible.
    pub message: Option<&'a str>,
    /// Shown centred on an empty document.
    pub banner: &'a str,
}

/// Rendering statistics.
#[derive(Clone, Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub last_frame_bytes: usize,
    pub total_bytes: u64,
}

/// Composes frames and writes them out in one piece.
#[derive(Debug, Default)]
pub struct Renderer {
    writer: FrameWriter,
    stats: RenderStats,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: FrameWriter::new(),
            stats: RenderStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Draw `frame` and write it to `out` with a single write.
    pub fn render_frame<W: Write + ?Sized>(
        &mut self,
        frame: &Frame<'_>,
        out: &mut W,
    ) -> io::Result<()> {
        self.compose(frame);
        let bytes = self.writer.buffer().len();
        self.writer.present(out)?;

        self.stats.frames += 1;
        self.stats.last_frame_bytes = bytes;
        self.stats.total_bytes += bytes as u64;
        Ok(())
    }

    /// Clear the screen and home the cursor, as done on exit.
    pub fn clear_screen<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        self.writer.clear_buffer();
        self.writer.clear_screen();
        self.writer.cursor_home();
        self.writer.present(out)
    }

    fn compose(&mut self, frame: &Frame<'_>) {
        self.writer.clear_buffer();
        self.writer.hide_cursor();
        self.writer.cursor_home();

        self.draw_rows(frame);
        self.draw_status_bar(frame);
        self.draw_message_bar(frame);

        let (row, col) = frame.viewport.screen_position(frame.cursor.cy, frame.rx);
        self.writer.move_cursor(row, col);
        self.writer.show_cursor();
    }

    fn draw_rows(&mut self, frame: &Frame<'_>) {
        let vp = frame.viewport;
        let doc = frame.document;

        for y in 0..vp.screen_rows {
            match doc.line(y + vp.row_offset) {
                Some(line) => {
                    let rendered = line.rendered();
                    let start = vp.col_offset.min(rendered.len());
                    let end = (start + vp.screen_cols).min(rendered.len());
                    self.writer.write_raw(&rendered[start..end]);
                }
                None if doc.is_empty() && y == vp.screen_rows / 3 => {
                    self.draw_banner(frame.banner, vp.screen_cols);
                }
                None => self.writer.pad(FILLER, 1),
            }
            self.writer.clear_line_right();
            self.writer.newline();
        }
    }

    fn draw_banner(&mut self, banner: &str, cols: usize) {
        let text = &banner.as_bytes()[..banner.len().min(cols)];
        let mut padding = (cols - text.len()) / 2;
        if padding > 0 {
            self.writer.pad(FILLER, 1);
            padding -= 1;
        }
        self.writer.pad(b' ', padding);
        self.writer.write_raw(text);
    }

    fn draw_status_bar(&mut self, frame: &Frame<'_>) {
        let cols = frame.viewport.screen_cols;
        let doc = frame.document;

        let name = frame.filename.unwrap_or(NO_NAME);
        let mut left = Vec::with_capacity(64);
        left.extend_from_slice(&name[..name.len().min(STATUS_NAME_LIMIT)]);
        left.extend_from_slice(format!(" - {} lines", doc.len()).as_bytes());
        if doc.is_dirty() {
            left.extend_from_slice(b" (modified)");
        }
        let right = format!("{}/{}", frame.cursor.cy + 1, doc.len());

        self.writer.inverse_on();
        let mut len = left.len().min(cols);
        self.writer.write_raw(&left[..len]);
        while len < cols {
            if cols - len == right.len() {
                self.writer.write_str(&right);
                break;
            }
            self.writer.pad(b' ', 1);
            len += 1;
        }
        self.writer.inverse_off();
        self.writer.newline();
    }

    fn draw_message_bar(&mut self, frame: &Frame<'_>) {
        self.writer.clear_line_right();
        if let Some(message) = frame.message {
            let bytes = message.as_bytes();
            self.writer
                .write_raw(&bytes[..bytes.len().min(frame.viewport.screen_cols)]);
        }
    }
}
