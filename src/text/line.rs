//! A single line of text and its tab-expanded rendering.

/// Columns per tab stop.
pub const TAB_STOP: usize = 8;

/// One line of the document.
///
/// `content` holds the bytes as stored on disk; `rendered` is `content` with
/// every tab expanded to spaces up to the next multiple of [`TAB_STOP`].
/// Every mutator regenerates `rendered` before returning, so the two never
/// disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    content: Vec<u8>,
    rendered: Vec<u8>,
}

impl Line {
    /// Create a line from raw bytes.
    #[must_use]
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        let mut line = Self {
            content: content.into(),
            rendered: Vec::new(),
        };
        line.update();
        line
    }

    /// Raw bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Tab-expanded bytes.
    #[must_use]
    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    /// Length of the raw bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Length of the rendered bytes.
    #[must_use]
    pub fn rsize(&self) -> usize {
        self.rendered.len()
    }

    /// Rendered column of byte offset `cx`.
    ///
    /// Offsets past the end are treated as the end of the line.
    #[must_use]
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.content[..cx.min(self.content.len())]
            .iter()
            .fold(0, |rx, &b| advance_column(rx, b))
    }

    /// Byte offset for rendered column `rx`.
    ///
    /// Returns the first offset whose byte ends past `rx`, which for a column
    /// inside an expanded tab is the tab itself. Columns past the end map to
    /// [`size`](Self::size).
    #[must_use]
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut current = 0;
        for (cx, &b) in self.content.iter().enumerate() {
            current = advance_column(current, b);
            if current > rx {
                return cx;
            }
        }
        self.content.len()
    }

    /// Rendered column where `needle` first occurs.
    ///
    /// An empty needle matches at column 0.
    #[must_use]
    pub fn find_rendered(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.rendered
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Insert a byte at `at`; offsets past the end append.
    pub(crate) fn insert_byte(&mut self, at: usize, byte: u8) {
        let at = at.min(self.content.len());
        self.content.insert(at, byte);
        self.update();
    }

    /// Remove the byte at `at`. Returns `false` if `at` is out of range.
    pub(crate) fn delete_byte(&mut self, at: usize) -> bool {
        if at >= self.content.len() {
            return false;
        }
        self.content.remove(at);
        self.update();
        true
    }

    pub(crate) fn append(&mut self, bytes: &[u8]) {
        self.content.extend_from_slice(bytes);
        self.update();
    }

    /// Cut the line at `at` and return the tail.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let tail = self.content.split_off(at.min(self.content.len()));
        self.update();
        tail
    }

    /// Regenerate the rendered form.
    fn update(&mut self) {
        let tabs = self.content.iter().filter(|&&b| b == b'\t').count();
        self.rendered.clear();
        self.rendered
            .reserve(self.content.len() + tabs * (TAB_STOP - 1));

        for &b in &self.content {
            if b == b'\t' {
                self.rendered.push(b' ');
                while self.rendered.len() % TAB_STOP != 0 {
                    self.rendered.push(b' ');
                }
            } else {
                self.rendered.push(b);
            }
        }
    }
}

/// Column after drawing byte `b` starting at column `rx`.
fn advance_column(rx: usize, b: u8) -> usize {
    if b == b'\t' {
        rx + TAB_STOP - rx % TAB_STOP
    } else {
        rx + 1
    }
}
