//! Modal single-line input in the message bar.

use super::{Editor, EditorState};
use crate::error::Result;
use crate::input::KeyEvent;
use crate::terminal::TerminalIo;

/// Per-keystroke hook: receives the editor state, the current input and the
/// key that was just handled (including the final Enter or ESC).
pub type PromptCallback<'a> = &'a mut dyn FnMut(&mut EditorState, &[u8], KeyEvent);

/// Substitute `input` for the first `%s` in `template`.
#[must_use]
pub fn fill_template(template: &str, input: &[u8]) -> String {
    let input = String::from_utf8_lossy(input);
    match template.split_once("%s") {
        Some((head, tail)) => format!("{head}{input}{tail}"),
        None => template.to_string(),
    }
}

impl<T: TerminalIo> Editor<T> {
    /// Read a line of input in the message bar.
    ///
    /// Printable ASCII is appended, Backspace/Delete/Ctrl-H erase the last
    /// byte, Enter accepts a non-empty buffer and ESC cancels. Returns `None`
    /// on cancel.
    pub fn prompt(
        &mut self,
        template: &str,
        mut callback: Option<PromptCallback<'_>>,
    ) -> Result<Option<Vec<u8>>> {
        let mut input = Vec::with_capacity(128);

        loop {
            self.state.set_status(fill_template(template, &input));
            self.refresh_screen()?;
            let key = self.read_key()?;

            if key.is_erase() {
                input.pop();
            } else if key.is_esc() {
                self.state.set_status("");
                if let Some(cb) = callback.as_deref_mut() {
                    cb(&mut self.state, &input, key);
                }
                return Ok(None);
            } else if key.is_enter() {
                if !input.is_empty() {
                    self.state.set_status("");
                    if let Some(cb) = callback.as_deref_mut() {
                        cb(&mut self.state, &input, key);
                    }
                    return Ok(Some(input));
                }
            } else if let Some(byte) = key.prompt_byte() {
                input.push(byte);
            }

            if let Some(cb) = callback.as_deref_mut() {
                cb(&mut self.state, &input, key);
            }
        }
    }
}
