//! Byte sequence analyzer
//!
//! Walks the raw bytes of the input and builds one token per byte. The
//! conversion is total: every byte value 0-255 has a representation in
//! all four radixes, so there are no error paths.

use crate::analysis::report::{ByteToken, Report};
use crate::domain::{display_glyph, ByteClass};

/// Analyze a string byte by byte.
///
/// The input is treated as its raw byte sequence, one byte per token;
/// multi-byte UTF-8 characters in the argument therefore produce one
/// token per encoded byte.
pub fn analyze(input: &str) -> Report {
    log::debug!("analyzing {} bytes", input.len());

    let bytes = analyze_bytes(input.as_bytes());

    Report {
        input: input.to_string(),
        count: bytes.len(),
        bytes,
    }
}

/// Build one token per byte, in input order.
pub fn analyze_bytes(input: &[u8]) -> Vec<ByteToken> {
    input
        .iter()
        .enumerate()
        .map(|(position, &byte)| ByteToken {
            position,
            glyph: display_glyph(byte),
            hex: format!("{:02X}", byte),
            decimal: byte,
            octal: format!("{:03o}", byte),
            binary: format!("{:08b}", byte),
            class: ByteClass::of(byte),
        })
        .collect()
}
