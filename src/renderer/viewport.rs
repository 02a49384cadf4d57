//! Scroll offsets and the cursor-to-screen mapping.

use crate::text::Document;

/// Logical cursor: `cy` indexes a line (or equals the line count on the
/// virtual trailing line), `cx` is a byte offset into that line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }

    /// Rendered column of this cursor in `doc`; 0 on the virtual line.
    #[must_use]
    pub fn rendered_column(&self, doc: &Document) -> usize {
        doc.line(self.cy).map_or(0, |line| line.cx_to_rx(self.cx))
    }
}

/// The visible window into the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document line.
    pub row_offset: usize,
    /// First visible rendered column.
    pub col_offset: usize,
    /// Text rows on screen (excludes the status and message bars).
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows,
            screen_cols,
        }
    }

    /// Move the offsets just far enough that `(cy, rx)` is visible.
    pub fn scroll(&mut self, cy: usize, rx: usize) {
        if cy < self.row_offset {
            self.row_offset = cy;
        }
        if cy >= self.row_offset + self.screen_rows {
            self.row_offset = (cy + 1).saturating_sub(self.screen_rows);
        }
        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if rx >= self.col_offset + self.screen_cols {
            self.col_offset = (rx + 1).saturating_sub(self.screen_cols);
        }
    }

    /// Scroll to the cursor and return its rendered column.
    pub fn scroll_to_cursor(&mut self, doc: &Document, cursor: Cursor) -> usize {
        let rx = cursor.rendered_column(doc);
        self.scroll(cursor.cy, rx);
        rx
    }

    /// Check if `(cy, rx)` lies inside the window.
    #[must_use]
    pub fn contains(&self, cy: usize, rx: usize) -> bool {
        (self.row_offset..self.row_offset + self.screen_rows).contains(&cy)
            && (self.col_offset..self.col_offset + self.screen_cols).contains(&rx)
    }

    /// 0-indexed screen position of `(cy, rx)`.
    ///
    /// Only meaningful after [`scroll`](Self::scroll) has made the position
    /// visible.
    #[must_use]
    pub fn screen_position(&self, cy: usize, rx: usize) -> (u32, u32) {
        let row = cy.saturating_sub(self.row_offset);
        let col = rx.saturating_sub(self.col_offset);
        (
            u32::try_from(row).unwrap_or(u32::MAX),
            u32::try_from(col).unwrap_or(u32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_is_minimal() {
        let mut vp = Viewport::new(10, 80);
        vp.scroll(15, 0);
        assert_eq!(vp.row_offset, 6);
        assert!(vp.contains(15, 0));

        vp.scroll(16, 0);
        assert_eq!(vp.row_offset, 7);
    }

    #[test]
    fn test_scroll_up_snaps_to_cursor() {
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 20;
        vp.scroll(12, 0);
        assert_eq!(vp.row_offset, 12);
    }

    #[test]
    fn test_visible_cursor_does_not_scroll() {
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 5;
        vp.scroll(9, 40);
        assert_eq!((vp.row_offset, vp.col_offset), (5, 0));
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut vp = Viewport::new(10, 20);
        vp.scroll(0, 25);
        assert_eq!(vp.col_offset, 6);
        vp.scroll(0, 3);
        assert_eq!(vp.col_offset, 3);
    }

    #[test]
    fn test_offset_past_end_snaps_back() {
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 100;
        vp.scroll(3, 0);
        assert_eq!(vp.row_offset, 3);
        assert_eq!(vp.screen_position(3, 0), (0, 0));
    }

    #[test]
    fn test_scroll_to_cursor_uses_rendered_column() {
        let doc = Document::from_bytes(b"\t\t\tx\n");
        let mut vp = Viewport::new(5, 10);
        let rx = vp.scroll_to_cursor(&doc, Cursor::new(3, 0));
        assert_eq!(rx, 24);
        assert_eq!(vp.col_offset, 15);
        assert_eq!(vp.screen_position(0, rx), (0, 9));
    }

    #[test]
    fn test_virtual_line_has_column_zero() {
        let doc = Document::from_bytes(b"abc\n");
        assert_eq!(Cursor::new(2, 1).rendered_column(&doc), 0);
    }
}
