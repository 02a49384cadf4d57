//! The editor cycle: read a key, apply it, redraw.
//!
//! [`EditorState`] holds everything the user is editing. [`Editor`] owns the
//! state together with a terminal, a decoder and a renderer, and runs the
//! cycle until the user quits. Prompt and search are modal sub-cycles that
//! reuse the same read and redraw steps.

mod prompt;
mod search;
mod status;

pub use prompt::{PromptCallback, fill_template};
pub use search::{Direction, SEARCH_PROMPT, SearchState};
pub use status::StatusMessage;

use crate::config::EditorOptions;
use crate::error::{Error, Result};
use crate::input::{InputDecoder, KeyCode, KeyEvent};
use crate::renderer::{Cursor, Frame, Renderer, Viewport};
use crate::terminal::TerminalIo;
use crate::text::Document;
use std::ffi::OsString;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::PathBuf;

/// Status template for naming an untitled buffer on save.
pub const SAVE_AS_PROMPT: &str = "Save as: %s (ESC to cancel)";

/// What the cycle should do after a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The document, cursor and view being edited.
#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub filename: Option<PathBuf>,
    pub options: EditorOptions,
    status: Option<StatusMessage>,
}

impl EditorState {
    /// Create state for a screen with `screen_rows` text rows.
    #[must_use]
    pub fn new(
        document: Document,
        filename: Option<PathBuf>,
        screen_rows: usize,
        screen_cols: usize,
        options: EditorOptions,
    ) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(screen_rows, screen_cols),
            filename,
            options,
            status: None,
        }
    }

    /// Replace the status message.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text));
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// The status message text, if it has not expired.
    #[must_use]
    pub fn visible_status(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|msg| msg.is_visible(self.options.message_timeout))
            .map(StatusMessage::text)
    }

    /// Raw bytes of the file name, for display.
    #[must_use]
    pub fn filename_bytes(&self) -> Option<&[u8]> {
        self.filename.as_deref().map(|p| p.as_os_str().as_bytes())
    }

    /// Scroll the viewport to the cursor and return the rendered column.
    pub fn scroll(&mut self) -> usize {
        self.viewport.scroll_to_cursor(&self.document, self.cursor)
    }

    /// Size of the line under the cursor; 0 on the virtual line.
    fn current_line_size(&self) -> usize {
        self.document.line(self.cursor.cy).map_or(0, |line| line.size())
    }

    /// Move the cursor one step for an arrow key.
    ///
    /// Left and Right wrap across line ends. The column is clamped to the
    /// destination line afterwards.
    pub fn move_cursor(&mut self, key: KeyCode) {
        let row_size = self.document.line(self.cursor.cy).map(|line| line.size());
        let cursor = &mut self.cursor;

        match key {
            KeyCode::Left => {
                if cursor.cx > 0 {
                    cursor.cx -= 1;
                } else if cursor.cy > 0 {
                    cursor.cy -= 1;
                    cursor.cx = self.document.line(cursor.cy).map_or(0, |line| line.size());
                }
            }
            KeyCode::Right => match row_size {
                Some(size) if cursor.cx < size => cursor.cx += 1,
                Some(_) => {
                    cursor.cy += 1;
                    cursor.cx = 0;
                }
                None => {}
            },
            KeyCode::Up => cursor.cy = cursor.cy.saturating_sub(1),
            KeyCode::Down => {
                if cursor.cy < self.document.len() {
                    cursor.cy += 1;
                }
            }
            _ => {}
        }

        let size = self.current_line_size();
        self.cursor.cx = self.cursor.cx.min(size);
    }

    /// Move a screenful up or down, starting from the top or bottom row.
    pub fn page(&mut self, key: KeyCode) {
        let rows = self.viewport.screen_rows;
        let step = match key {
            KeyCode::PageUp => {
                self.cursor.cy = self.viewport.row_offset;
                KeyCode::Up
            }
            KeyCode::PageDown => {
                let bottom = (self.viewport.row_offset + rows).saturating_sub(1);
                self.cursor.cy = bottom.min(self.document.len());
                KeyCode::Down
            }
            _ => return,
        };
        for _ in 0..rows {
            self.move_cursor(step);
        }
    }

    /// Insert a byte at the cursor, creating a line if on the virtual line.
    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.document.len() {
            self.document.insert_line(self.document.len(), b"");
        }
        self.document
            .insert_char(self.cursor.cy, self.cursor.cx, byte);
        self.cursor.cx += 1;
    }

    /// Break the line at the cursor.
    pub fn insert_newline(&mut self) {
        let Cursor { cx, cy } = self.cursor;
        if cx == 0 {
            self.document.insert_line(cy, b"");
        } else {
            self.document.split_line(cy, cx);
        }
        self.cursor = Cursor::new(0, cy + 1);
    }

    /// Delete the byte left of the cursor, joining lines at column 0.
    pub fn delete_char(&mut self) {
        let Cursor { cx, cy } = self.cursor;
        if cy >= self.document.len() || (cx == 0 && cy == 0) {
            return;
        }
        if cx > 0 {
            self.document.delete_char(cy, cx - 1);
            self.cursor.cx -= 1;
        } else if let Some(at) = self.document.merge_with_previous(cy) {
            self.cursor = Cursor::new(at, cy - 1);
        }
    }
}

/// The interactive editor.
pub struct Editor<T: TerminalIo> {
    term: T,
    decoder: InputDecoder,
    renderer: Renderer,
    state: EditorState,
    quit_remaining: usize,
}

impl<T: TerminalIo> Editor<T> {
    #[must_use]
    pub fn new(term: T, state: EditorState) -> Self {
        let quit_remaining = state.options.quit_times;
        Self {
            term,
            decoder: InputDecoder::new(),
            renderer: Renderer::new(),
            state,
            quit_remaining,
        }
    }

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.term
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.term
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Give back the terminal.
    pub fn into_terminal(self) -> T {
        self.term
    }

    /// Run until the user quits, then clear the screen.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh_screen()?;
            let key = self.read_key()?;
            if self.process_key(key)? == Flow::Quit {
                break;
            }
        }
        tracing::info!(frames = self.renderer.stats().frames, "quit");
        self.renderer
            .clear_screen(&mut self.term)
            .map_err(|e| Error::terminal("write", e))
    }

    /// Block until a complete key arrives.
    pub fn read_key(&mut self) -> Result<KeyEvent> {
        self.decoder.read_key(&mut self.term)
    }

    /// Scroll to the cursor and draw one frame.
    pub fn refresh_screen(&mut self) -> Result<()> {
        let rx = self.state.scroll();
        let frame = Frame {
            document: &self.state.document,
            viewport: &self.state.viewport,
            cursor: self.state.cursor,
            rx,
            filename: self.state.filename_bytes(),
            message: self.state.visible_status(),
            banner: &self.state.options.banner,
        };
        self.renderer
            .render_frame(&frame, &mut self.term)
            .map_err(|e| Error::terminal("write", e))
    }

    /// Apply one key.
    pub fn process_key(&mut self, key: KeyEvent) -> Result<Flow> {
        if key.is_ctrl(b'q') {
            return Ok(self.request_quit());
        }

        match key.code {
            KeyCode::Enter => self.state.insert_newline(),
            KeyCode::Char(b's') if key.has_ctrl() => self.save()?,
            KeyCode::Char(b'f') if key.has_ctrl() => self.find()?,
            KeyCode::Home => self.state.cursor.cx = 0,
            KeyCode::End => {
                if let Some(line) = self.state.document.line(self.state.cursor.cy) {
                    self.state.cursor.cx = line.size();
                }
            }
            KeyCode::PageUp | KeyCode::PageDown => self.state.page(key.code),
            code if code.is_arrow() => self.state.move_cursor(code),
            _ if key.is_erase() => {
                if key.code == KeyCode::Delete {
                    self.state.move_cursor(KeyCode::Right);
                }
                self.state.delete_char();
            }
            _ => {
                if let Some(byte) = key.insertable_byte() {
                    self.state.insert_char(byte);
                }
            }
        }

        self.quit_remaining = self.state.options.quit_times;
        Ok(Flow::Continue)
    }

    /// Quit, unless unsaved changes still need confirming.
    fn request_quit(&mut self) -> Flow {
        if self.state.document.is_dirty() && self.quit_remaining > 0 {
            self.state.set_status(format!(
                "WARNING! File has unsaved changes. Press Ctrl-Q {} more time(s) to quit.",
                self.quit_remaining
            ));
            self.quit_remaining -= 1;
            return Flow::Continue;
        }
        Flow::Quit
    }

    /// Save to the current file name, prompting for one if needed.
    ///
    /// Failures end up in the status message; only terminal errors propagate.
    pub fn save(&mut self) -> Result<()> {
        if self.state.filename.is_none() {
            match self.prompt(SAVE_AS_PROMPT, None)? {
                Some(name) => {
                    self.state.filename = Some(PathBuf::from(OsString::from_vec(name)));
                }
                None => {
                    self.state.set_status("Save aborted");
                    return Ok(());
                }
            }
        }
        let Some(path) = self.state.filename.clone() else {
            return Ok(());
        };

        match self.state.document.save(&path) {
            Ok(written) => {
                self.state.set_status(format!("{written} bytes written to disk"));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                self.state.set_status(format!("Can't save! I/O error: {e}"));
            }
        }
        Ok(())
    }
}
