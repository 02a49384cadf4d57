//! Keyboard event types.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Control key (the byte arrived with bits 5 and 6 cleared).
        const CTRL = 0b0000_0001;
    }
}

/// A logical key produced by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key (DEL, 0x7f).
    Backspace,
    /// Enter/Return key (CR, 0x0d).
    Enter,
    /// Tab key (HT, 0x09).
    Tab,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Delete key.
    Delete,
    /// Escape key, or an escape sequence that was not recognized.
    Esc,
    /// A single byte. With [`KeyModifiers::CTRL`] this is the lowercase
    /// letter (or symbol) the control byte was derived from.
    Char(u8),
}

impl KeyCode {
    /// Check if this is an arrow key.
    #[must_use]
    pub fn is_arrow(&self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Up | Self::Down)
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a plain character key event.
    #[must_use]
    pub fn char(byte: u8) -> Self {
        Self::key(KeyCode::Char(byte))
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn ctrl(byte: u8) -> Self {
        Self::new(KeyCode::Char(byte), KeyModifiers::CTRL)
    }

    /// Decode a C0 control byte (0x00..=0x1f) into a Ctrl+key event.
    ///
    /// Letters come back lowercase: 0x11 is Ctrl+q.
    #[must_use]
    pub fn from_control_byte(byte: u8) -> Self {
        match byte {
            0x01..=0x1a => Self::ctrl(byte - 1 + b'a'),
            _ => Self::ctrl(byte | 0x40),
        }
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn has_ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if this is Ctrl plus the given (lowercase) letter.
    #[must_use]
    pub fn is_ctrl(&self, letter: u8) -> bool {
        self.has_ctrl() && self.code == KeyCode::Char(letter)
    }

    /// The byte this event inserts into a document, if any.
    ///
    /// Tab and every unmodified character byte qualify, including bytes
    /// above 0x7f.
    #[must_use]
    pub fn insertable_byte(&self) -> Option<u8> {
        match (self.code, self.has_ctrl()) {
            (KeyCode::Tab, _) => Some(b'\t'),
            (KeyCode::Char(b), false) => Some(b),
            _ => None,
        }
    }

    /// The byte this event appends to a prompt buffer, if any (printable ASCII).
    #[must_use]
    pub fn prompt_byte(&self) -> Option<u8> {
        match (self.code, self.has_ctrl()) {
            (KeyCode::Char(b), false) if b == b' ' || b.is_ascii_graphic() => Some(b),
            _ => None,
        }
    }

    /// Check if this is Escape.
    #[must_use]
    pub fn is_esc(&self) -> bool {
        self.code == KeyCode::Esc
    }

    /// Check if this is Enter.
    #[must_use]
    pub fn is_enter(&self) -> bool {
        self.code == KeyCode::Enter
    }

    /// Check if this erases backward: Backspace, Delete or Ctrl+H.
    #[must_use]
    pub fn is_erase(&self) -> bool {
        matches!(self.code, KeyCode::Backspace | KeyCode::Delete) || self.is_ctrl(b'h')
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}
