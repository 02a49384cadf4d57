//! Keyboard input decoding.
//!
//! Raw-mode terminals deliver keys as bytes; special keys arrive as short
//! escape sequences. [`InputDecoder`] turns those bytes into the closed set
//! of [`KeyEvent`]s the editor reacts to.

mod decoder;
mod keyboard;

pub use decoder::{DecodeState, InputDecoder};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
