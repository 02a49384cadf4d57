//! The document: an ordered list of lines plus a modification counter.
//!
//! # Examples
//!
//! ```
//! use kilo_rust::text::Document;
//!
//! let mut doc = Document::from_bytes(b"Hello\tWorld\nfoo\n");
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.line(0).unwrap().cx_to_rx(6), 8);
//!
//! doc.append_bytes(0, b"foo");
//! doc.delete_line(1);
//! assert_eq!(doc.serialize(), b"Hello\tWorldfoo\n");
//! assert!(doc.is_dirty());
//! ```

use super::line::Line;
use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// File mode for newly created files.
const CREATE_MODE: u32 = 0o644;

/// Ordered lines of text.
///
/// `dirty` counts mutations since the last load or save; zero means the
/// in-memory text matches what is on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    dirty: u64,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from file contents.
    ///
    /// Lines are split on `\n`. Trailing `\r` bytes are stripped from each
    /// line and a final newline does not produce an extra empty line.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let lines = if bytes.is_empty() {
            Vec::new()
        } else {
            body.split(|&b| b == b'\n')
                .map(|raw| {
                    let end = raw.iter().rposition(|&b| b != b'\r').map_or(0, |i| i + 1);
                    Line::new(&raw[..end])
                })
                .collect()
        };
        Self { lines, dirty: 0 }
    }

    /// Load a document from `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::Storage {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_bytes(&bytes);
        tracing::debug!(path = %path.display(), lines = doc.len(), "document loaded");
        Ok(doc)
    }

    /// Write the document to `path` and mark it clean.
    ///
    /// The file is created with mode 0644 if missing and truncated to the
    /// serialized length. Returns the number of bytes written. On failure the
    /// document stays dirty.
    pub fn save(&mut self, path: &Path) -> io::Result<usize> {
        let bytes = self.serialize();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .mode(CREATE_MODE)
            .open(path)?;
        file.set_len(bytes.len() as u64)?;
        file.write_all(&bytes)?;
        self.dirty = 0;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "document saved");
        Ok(bytes.len())
    }

    /// Concatenate every line, each terminated by `\n`.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        let total = self.lines.iter().map(|l| l.size() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for line in &self.lines {
            out.extend_from_slice(line.content());
            out.push(b'\n');
        }
        out
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Mutations since the last load or save.
    #[must_use]
    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Insert a new line at `at`. Out-of-range positions are ignored.
    pub fn insert_line(&mut self, at: usize, content: &[u8]) -> bool {
        if at > self.lines.len() {
            return false;
        }
        self.lines.insert(at, Line::new(content));
        self.dirty += 1;
        true
    }

    /// Remove and return the line at `at`.
    pub fn delete_line(&mut self, at: usize) -> Option<Line> {
        if at >= self.lines.len() {
            return None;
        }
        self.dirty += 1;
        Some(self.lines.remove(at))
    }

    /// Insert `byte` into line `index` at offset `at`.
    ///
    /// Offsets past the end of the line append. Returns `false` if the line
    /// does not exist.
    pub fn insert_char(&mut self, index: usize, at: usize, byte: u8) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        line.insert_byte(at, byte);
        self.dirty += 1;
        true
    }

    /// Delete the byte at offset `at` of line `index`.
    pub fn delete_char(&mut self, index: usize, at: usize) -> bool {
        let deleted = self
            .lines
            .get_mut(index)
            .is_some_and(|line| line.delete_byte(at));
        if deleted {
            self.dirty += 1;
        }
        deleted
    }

    /// Append `bytes` to the end of line `index`.
    pub fn append_bytes(&mut self, index: usize, bytes: &[u8]) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        line.append(bytes);
        self.dirty += 1;
        true
    }

    /// Split line `index` at offset `at`, moving the tail onto a new line below.
    pub fn split_line(&mut self, index: usize, at: usize) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        let tail = line.split_off(at);
        self.lines.insert(index + 1, Line::new(tail));
        self.dirty += 1;
        true
    }

    /// Join line `index` with the line above it.
    ///
    /// Returns the byte offset in the merged line where the joined text begins.
    pub fn merge_with_previous(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(index);
        let prev = &mut self.lines[index - 1];
        let at = prev.size();
        prev.append(removed.content());
        self.dirty += 1;
        Some(at)
    }

    /// First match of `needle` in rendered text, scanning lines in the given
    /// order. Returns `(line, rendered column)`.
    pub fn find_in<I>(&self, order: I, needle: &[u8]) -> Option<(usize, usize)>
    where
        I: IntoIterator<Item = usize>,
    {
        order.into_iter().find_map(|index| {
            self.lines
                .get(index)
                .and_then(|line| line.find_rendered(needle))
                .map(|rx| (index, rx))
        })
    }
}
