//! Constant ANSI escape sequences.

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Switch to inverted video.
pub const INVERSE_ON: &str = "\x1b[7m";

/// Return to normal video.
pub const INVERSE_OFF: &str = "\x1b[m";

/// Line terminator inside a frame (output post-processing is off in raw mode).
pub const NEWLINE: &str = "\r\n";

/// Push the cursor right and down as far as the terminal allows.
///
/// Terminals clamp these moves at the screen edge, so the cursor ends up in
/// the bottom-right cell, whose position is then the screen size.
pub const CURSOR_FAR_BOTTOM_RIGHT: &str = "\x1b[999C\x1b[999B";

/// Terminal query sequences.
pub mod query {
    /// Device status report: ask for the cursor position (`ESC [ rows ; cols R`).
    pub const CURSOR_POSITION: &str = "\x1b[6n";
}
