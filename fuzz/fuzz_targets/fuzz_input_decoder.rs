//! Fuzz target for the escape-sequence decoder.
//!
//! Terminal input is untrusted: any byte stream, with timeouts at any point,
//! must decode without panicking and leave the decoder idle after a timeout.

#![no_main]

use kilo_rust::input::InputDecoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = InputDecoder::new();

    // A 0xff byte stands in for a read timeout.
    for &byte in data {
        let read = if byte == 0xff { None } else { Some(byte) };
        let _ = decoder.advance(read);
    }

    let _ = decoder.advance(None);
    assert!(!decoder.is_pending());
});
