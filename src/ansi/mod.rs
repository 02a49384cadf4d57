//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::FrameWriter;
pub use sequences::*;

use std::io::{self, Write};

/// Write a u32 as decimal digits to a writer without formatting overhead.
///
/// Stack buffer is sized for max u32 digits (10) to avoid heap allocation.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    // Fast paths for common small values (most cursor positions)
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    if n < 100 {
        return w.write_all(&[b'0' + (n / 10) as u8, b'0' + (n % 10) as u8]);
    }

    let mut buf = [0u8; 10]; // max u32 is 4294967295 (10 digits)
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Write an absolute cursor position sequence (0-indexed input, 1-indexed output).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row.saturating_add(1))?;
    w.write_all(b";")?;
    write_u32_decimal(w, col.saturating_add(1))?;
    w.write_all(b"H")
}
