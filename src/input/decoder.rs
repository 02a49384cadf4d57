//! Escape-sequence decoder for raw terminal input.
//!
//! Turns the byte stream of a raw-mode terminal into [`KeyEvent`]s. The
//! decoder is a small state machine fed one read result at a time, where a
//! read result is either a byte or a timeout:
//!
//! ```text
//! Normal --ESC--> EscSeen --'['--> Csi --digit--> CsiDigit --'~'--> key
//!                    |               \--A/B/C/D/H/F--> key
//!                    \--'O'--> Ss3 --H/F--> key
//! ```
//!
//! A timeout or an unexpected byte in any escape state abandons the
//! sequence and yields [`KeyCode::Esc`]; the offending byte is consumed,
//! except for a new ESC, which starts the next sequence.
//! Decoding never blocks beyond one bounded read and never fails on
//! malformed input.
//!
//! # Examples
//!
//! ```
//! use kilo_rust::input::{InputDecoder, KeyCode, KeyEvent};
//!
//! let mut decoder = InputDecoder::new();
//! assert_eq!(decoder.feed(b"\x1b[5~x"), vec![
//!     KeyEvent::key(KeyCode::PageUp),
//!     KeyEvent::char(b'x'),
//! ]);
//!
//! // A lone ESC followed by a read timeout is the Escape key.
//! assert!(decoder.feed(b"\x1b").is_empty());
//! assert_eq!(decoder.advance(None), Some(KeyEvent::key(KeyCode::Esc)));
//! ```

use crate::error::{Error, Result};
use crate::input::keyboard::{KeyCode, KeyEvent};
use crate::terminal::TerminalIo;

const ESC: u8 = 0x1b;

/// Decoder state between reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeState {
    /// Not inside an escape sequence.
    #[default]
    Normal,
    /// Saw ESC.
    EscSeen,
    /// Saw `ESC [`.
    Csi,
    /// Saw `ESC [ <digit>`, waiting for `~`.
    CsiDigit(u8),
    /// Saw `ESC O`, waiting for `H` or `F`.
    Ss3,
}

/// Byte-at-a-time key decoder.
#[derive(Clone, Debug, Default)]
pub struct InputDecoder {
    state: DecodeState,
}

impl InputDecoder {
    /// Create a new decoder in the normal state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Whether an escape sequence is partially decoded.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state != DecodeState::Normal
    }

    /// Advance by one read result.
    ///
    /// `None` is a read that timed out with no byte. Returns a key once one
    /// is complete.
    pub fn advance(&mut self, byte: Option<u8>) -> Option<KeyEvent> {
        let (next, key) = match (self.state, byte) {
            (DecodeState::Normal, None) => (DecodeState::Normal, None),
            (DecodeState::Normal, Some(ESC)) => (DecodeState::EscSeen, None),
            (DecodeState::Normal, Some(b)) => (DecodeState::Normal, Some(decode_plain(b))),

            // A fresh ESC ends the pending sequence and starts another.
            (_, Some(ESC)) => {
                tracing::trace!(state = ?self.state, "escape sequence restarted");
                (DecodeState::EscSeen, Some(KeyEvent::key(KeyCode::Esc)))
            }

            (DecodeState::EscSeen, Some(b'[')) => (DecodeState::Csi, None),
            (DecodeState::EscSeen, Some(b'O')) => (DecodeState::Ss3, None),

            (DecodeState::Csi, Some(d @ b'0'..=b'9')) => (DecodeState::CsiDigit(d), None),
            (DecodeState::Csi, Some(b)) => match csi_final(b) {
                Some(code) => (DecodeState::Normal, Some(KeyEvent::key(code))),
                None => self.abandon(byte),
            },

            (DecodeState::CsiDigit(d), Some(b'~')) => match tilde_key(d) {
                Some(code) => (DecodeState::Normal, Some(KeyEvent::key(code))),
                None => self.abandon(byte),
            },

            (DecodeState::Ss3, Some(b'H')) => {
                (DecodeState::Normal, Some(KeyEvent::key(KeyCode::Home)))
            }
            (DecodeState::Ss3, Some(b'F')) => {
                (DecodeState::Normal, Some(KeyEvent::key(KeyCode::End)))
            }

            _ => self.abandon(byte),
        };
        self.state = next;
        key
    }

    /// Give up on the current escape sequence.
    fn abandon(&self, byte: Option<u8>) -> (DecodeState, Option<KeyEvent>) {
        tracing::trace!(state = ?self.state, ?byte, "escape sequence abandoned");
        (DecodeState::Normal, Some(KeyEvent::key(KeyCode::Esc)))
    }

    /// Decode a complete buffer, without treating its end as a timeout.
    ///
    /// A trailing partial sequence stays pending; resolve it with
    /// `advance(None)` or by feeding more bytes.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<KeyEvent> {
        bytes.iter().filter_map(|&b| self.advance(Some(b))).collect()
    }

    /// Read from the terminal until one key is decoded.
    ///
    /// Timeouts in the normal state are retried; timeouts inside an escape
    /// sequence resolve it to ESC.
    pub fn read_key<T: TerminalIo + ?Sized>(&mut self, term: &mut T) -> Result<KeyEvent> {
        loop {
            let byte = term.read_byte().map_err(|e| Error::terminal("read", e))?;
            if let Some(key) = self.advance(byte) {
                return Ok(key);
            }
        }
    }

    /// Drop any partial sequence.
    pub fn clear(&mut self) {
        self.state = DecodeState::Normal;
    }
}

/// Decode a byte outside of any escape sequence.
fn decode_plain(byte: u8) -> KeyEvent {
    match byte {
        b'\r' => KeyEvent::key(KeyCode::Enter),
        b'\t' => KeyEvent::key(KeyCode::Tab),
        0x7f => KeyEvent::key(KeyCode::Backspace),
        0x00..=0x1f => KeyEvent::from_control_byte(byte),
        _ => KeyEvent::char(byte),
    }
}

/// Final byte of `ESC [ <letter>`.
fn csi_final(byte: u8) -> Option<KeyCode> {
    match byte {
        b'A' => Some(KeyCode::Up),
        b'B' => Some(KeyCode::Down),
        b'C' => Some(KeyCode::Right),
        b'D' => Some(KeyCode::Left),
        b'H' => Some(KeyCode::Home),
        b'F' => Some(KeyCode::End),
        _ => None,
    }
}

/// Digit of `ESC [ <digit> ~`.
fn tilde_key(digit: u8) -> Option<KeyCode> {
    match digit {
        b'1' | b'7' => Some(KeyCode::Home),
        b'3' => Some(KeyCode::Delete),
        b'4' | b'8' => Some(KeyCode::End),
        b'5' => Some(KeyCode::PageUp),
        b'6' => Some(KeyCode::PageDown),
        _ => None,
    }
}
