//! Fuzz target for document row operations.
//!
//! Interprets the input as a stream of edits and checks that the rendered
//! form of every line stays consistent with its content.

#![no_main]

use kilo_rust::text::{Document, TAB_STOP};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut doc = Document::from_bytes(b"seed\tline\n");

    for op in data.chunks_exact(3) {
        let [kind, a, b] = [op[0], op[1], op[2]];
        let row = usize::from(a) % (doc.len() + 1);
        let at = usize::from(b);
        match kind % 6 {
            0 => {
                doc.insert_char(row, at, b);
            }
            1 => {
                doc.delete_char(row, at);
            }
            2 => {
                doc.insert_line(row, &[b'\t', b]);
            }
            3 => {
                doc.delete_line(row);
            }
            4 => {
                doc.split_line(row, at);
            }
            _ => {
                doc.merge_with_previous(row);
            }
        }
    }

    for line in doc.lines() {
        assert_eq!(line.cx_to_rx(line.size()), line.rsize());
        assert!(!line.rendered().contains(&b'\t'));
        for (cx, &byte) in line.content().iter().enumerate() {
            if byte == b'\t' {
                assert_eq!(line.cx_to_rx(cx + 1) % TAB_STOP, 0);
            }
        }
    }
});
