//! Terminal query response parsing.
//!
//! The only query the editor sends is the device status report for the
//! cursor position (`ESC [ 6 n`), which is used to discover the window size
//! when `TIOCGWINSZ` is unavailable.

/// Longest cursor position report we are willing to collect.
pub const MAX_REPORT_LENGTH: usize = 31;

/// A parsed cursor position report: `ESC [ rows ; cols R`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorPositionReport {
    /// 1-indexed row.
    pub row: u16,
    /// 1-indexed column.
    pub col: u16,
}

impl CursorPositionReport {
    /// Parse a report from raw bytes.
    ///
    /// The trailing `R` is optional, since the collector stops reading when it
    /// sees it.
    #[must_use]
    pub fn parse(input: &[u8]) -> Option<Self> {
        if input.len() < 3 || input[0] != 0x1b || input[1] != b'[' {
            return None;
        }

        let body = match input.iter().position(|&b| b == b'R') {
            Some(end) => &input[2..end],
            None => &input[2..],
        };

        let body = std::str::from_utf8(body).ok()?;
        let (row, col) = body.split_once(';')?;

        Some(Self {
            row: row.parse().ok()?,
            col: col.parse().ok()?,
        })
    }
}
