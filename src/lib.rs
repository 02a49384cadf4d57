//! `kilo_rust` - a small raw-terminal text editor
//!
//! The editor works directly on a raw-mode terminal: it decodes the byte
//! stream into key events, edits a line-structured document whose rendered
//! form expands tabs, and redraws the screen one batched frame at a time.
//!
//! The pieces, bottom-up:
//!
//! - [`terminal`]: raw mode, bounded reads, geometry
//! - [`input`]: escape-sequence decoder producing [`KeyEvent`]s
//! - [`text`]: [`Document`] and [`Line`]
//! - [`renderer`]: [`Viewport`] scrolling and frame composition
//! - [`editor`]: the read, apply, redraw cycle with prompt and search
//!
//! # Examples
//!
//! Driving the editor with a scripted terminal:
//!
//! ```
//! use kilo_rust::{Document, Editor, EditorOptions, EditorState, TerminalIo};
//! use kilo_rust::input::KeyEvent;
//! use std::io::{self, Write};
//!
//! struct Script(Vec<u8>);
//!
//! impl Write for Script {
//!     fn write(&mut self, buf: &[u8]) -> io::Result<usize> { Ok(buf.len()) }
//!     fn flush(&mut self) -> io::Result<()> { Ok(()) }
//! }
//!
//! impl TerminalIo for Script {
//!     fn read_byte(&mut self) -> io::Result<Option<u8>> {
//!         Ok(if self.0.is_empty() { None } else { Some(self.0.remove(0)) })
//!     }
//!     fn direct_window_size(&self) -> Option<(u16, u16)> { Some((24, 80)) }
//! }
//!
//! let state = EditorState::new(Document::new(), None, 22, 80, EditorOptions::default());
//! let mut editor = Editor::new(Script(Vec::new()), state);
//! for byte in b"hi" {
//!     editor.process_key(KeyEvent::char(*byte)).unwrap();
//! }
//! assert_eq!(editor.state().document.serialize(), b"hi\n");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow KeyCode in input::keyboard etc
#![allow(clippy::missing_errors_doc)] // Errors are described on the Error enum
#![allow(clippy::missing_panics_doc)] // Panics are test-only
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod terminal;
pub mod text;

// Re-export core types at crate root
pub use config::{Config, EditorOptions, ParseResult};
pub use editor::{Editor, EditorState, Flow, SearchState, StatusMessage};
pub use error::{Error, Result};
pub use input::{InputDecoder, KeyCode, KeyEvent, KeyModifiers};
pub use renderer::{Cursor, Frame, RenderStats, Renderer, Viewport};
pub use terminal::{RawModeGuard, TerminalIo, Tty, enable_raw_mode, is_tty, query_window_size};
pub use text::{Document, Line, TAB_STOP};
