//! Test fixtures and helpers for editor tests.
//!
//! - [`MockTerminal`] - scripted input, captured output
//! - [`keys`] - raw byte encodings of the keys the editor binds
//! - [`editor_with`] - an editor over a mock terminal

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)] // Each test binary uses a different subset

pub mod mock_terminal;

pub use mock_terminal::*;

use kilo_rust::{Document, Editor, EditorOptions, EditorState};
use std::path::PathBuf;
use std::sync::Once;

/// Raw bytes a terminal sends for each key.
pub mod keys {
    pub const ENTER: &[u8] = b"\r";
    pub const BACKSPACE: &[u8] = b"\x7f";
    pub const CTRL_F: &[u8] = b"\x06";
    pub const CTRL_H: &[u8] = b"\x08";
    pub const CTRL_Q: &[u8] = b"\x11";
    pub const CTRL_S: &[u8] = b"\x13";
    pub const UP: &[u8] = b"\x1b[A";
    pub const DOWN: &[u8] = b"\x1b[B";
    pub const RIGHT: &[u8] = b"\x1b[C";
    pub const LEFT: &[u8] = b"\x1b[D";
    pub const HOME: &[u8] = b"\x1b[H";
    pub const END: &[u8] = b"\x1b[F";
    pub const DELETE: &[u8] = b"\x1b[3~";
    pub const PAGE_UP: &[u8] = b"\x1b[5~";
    pub const PAGE_DOWN: &[u8] = b"\x1b[6~";
}

/// Install a test-writer subscriber once per test binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Build an editor over a `rows x cols` mock terminal, with the usual two
/// rows reserved for the status and message bars.
pub fn editor_with(
    text: &[u8],
    filename: Option<PathBuf>,
    rows: u16,
    cols: u16,
) -> Editor<MockTerminal> {
    setup_test_logging();
    let state = EditorState::new(
        Document::from_bytes(text),
        filename,
        usize::from(rows - 2),
        usize::from(cols),
        EditorOptions::default(),
    );
    Editor::new(MockTerminal::new(rows, cols), state)
}

/// Read and apply keys until the script runs out or the user quits.
///
/// Returns `true` if the editor asked to quit.
pub fn drive(editor: &mut Editor<MockTerminal>) -> bool {
    loop {
        let Ok(key) = editor.read_key() else {
            return false;
        };
        match editor.process_key(key) {
            Ok(kilo_rust::Flow::Quit) => return true,
            Ok(kilo_rust::Flow::Continue) => {}
            Err(_) => return false,
        }
    }
}
