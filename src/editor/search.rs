//! Incremental search.
//!
//! [`SearchState`] is driven one prompt keystroke at a time. Editing the
//! query restarts the scan from the top; arrow keys step to the next or
//! previous matching line, wrapping around either end of the document.

use super::{Editor, EditorState};
use crate::error::Result;
use crate::input::{KeyCode, KeyEvent};
use crate::renderer::Cursor;
use crate::terminal::TerminalIo;
use crate::text::Document;

/// Status template shown while searching.
pub const SEARCH_PROMPT: &str = "Search: %s (Use ESC/Arrows/Enter)";

/// Scan direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Anchor and direction of an active search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: Direction,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A search that already matched `line`, so the next step resumes past it.
    #[must_use]
    pub fn anchored_at(line: usize, direction: Direction) -> Self {
        Self {
            last_match: Some(line),
            direction,
        }
    }

    #[must_use]
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// React to one keystroke of the search prompt.
    ///
    /// Returns the cursor position of the next match, or `None` when the key
    /// ends the search or no line contains `query`.
    pub fn on_key(&mut self, doc: &Document, query: &[u8], key: KeyEvent) -> Option<Cursor> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.reset();
                return None;
            }
            KeyCode::Right | KeyCode::Down => self.direction = Direction::Forward,
            KeyCode::Left | KeyCode::Up => self.direction = Direction::Backward,
            _ => self.reset(),
        }
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }

        let Some((cy, rx)) = doc.find_in(self.scan_order(doc.len()), query) else {
            tracing::debug!(query = %String::from_utf8_lossy(query), "search miss");
            return None;
        };
        self.last_match = Some(cy);
        let cx = doc.line(cy).map_or(0, |line| line.rx_to_cx(rx));
        tracing::debug!(line = cy, column = cx, "search hit");
        Some(Cursor::new(cx, cy))
    }

    /// Line indices to examine: every line once, starting one step past the
    /// anchor and wrapping at both ends.
    fn scan_order(&self, len: usize) -> impl Iterator<Item = usize> {
        let anchor = self.last_match;
        let direction = self.direction;
        (1..=len).map(move |step| match (anchor, direction) {
            (None, _) => step - 1,
            (Some(line), Direction::Forward) => (line + step) % len,
            (Some(line), Direction::Backward) => (line + len - step % len) % len,
        })
    }
}

impl<T: TerminalIo> Editor<T> {
    /// Run an interactive search.
    ///
    /// The cursor follows matches while the query is typed. Cancelling with
    /// ESC puts the cursor and scroll offsets back where they were.
    pub fn find(&mut self) -> Result<()> {
        let saved_cursor = self.state.cursor;
        let saved_viewport = self.state.viewport;

        let mut search = SearchState::new();
        let mut on_key = |state: &mut EditorState, query: &[u8], key: KeyEvent| {
            if let Some(hit) = search.on_key(&state.document, query, key) {
                state.cursor = hit;
                // Forces the next scroll to put the match on the top row.
                state.viewport.row_offset = state.document.len();
            }
        };

        if self.prompt(SEARCH_PROMPT, Some(&mut on_key))?.is_none() {
            self.state.cursor = saved_cursor;
            self.state.viewport = saved_viewport;
        }
        Ok(())
    }
}
