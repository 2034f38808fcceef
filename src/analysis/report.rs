//! Report and per-byte token types
//!
//! The `Report` holds one `ByteToken` per input byte and knows how to
//! render the five text lines: the input echo and the four aligned rows
//! (ASCII, hex, decimal, binary).

use crate::domain::ByteClass;
use serde::Serialize;

/// Per-byte column width in the ASCII, hex, and decimal rows.
///
/// The binary row is fixed-width by nature (8 digits plus one separating
/// space), so it does not use this constant.
pub const FIELD_WIDTH: usize = 9;

/// All representations of a single input byte
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByteToken {
    /// Byte offset in the input (0-based)
    pub position: usize,
    /// Display glyph (placeholder form for non-printable bytes)
    #[serde(rename = "char")]
    pub glyph: String,
    /// Two-digit uppercase hexadecimal
    pub hex: String,
    /// Unsigned byte value (0-255)
    pub decimal: u8,
    /// Three-digit octal
    pub octal: String,
    /// Eight-digit binary, most significant bit first
    pub binary: String,
    /// Byte category
    pub class: ByteClass,
}

/// Analysis result for one input string
///
/// Produced by [`crate::analysis::analyze`] and consumed within the same
/// invocation; there is no state beyond the single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The original input, echoed verbatim
    pub input: String,
    /// Number of input bytes
    pub count: usize,
    /// One token per input byte, in input order
    pub bytes: Vec<ByteToken>,
}

impl Report {
    /// The echo line: the input as text, quoted
    pub fn echo_line(&self) -> String {
        format!("Input string: \"{}\"", self.input)
    }

    /// The character row: each byte reinterpreted as a character code,
    /// right-aligned. No sanitization and no multi-byte decoding; a byte
    /// above the ASCII range displays as whatever single character that
    /// code point names.
    pub fn ascii_row(&self) -> String {
        let mut row = String::from("ASCII:");
        for token in &self.bytes {
            row.push_str(&format!(
                "{:>width$}",
                token.decimal as char,
                width = FIELD_WIDTH
            ));
        }
        row
    }

    /// The hexadecimal row: uppercase, no `0x`, right-aligned
    pub fn hex_row(&self) -> String {
        let mut row = String::from("Hex:  ");
        for token in &self.bytes {
            row.push_str(&format!("{:>width$X}", token.decimal, width = FIELD_WIDTH));
        }
        row
    }

    /// The decimal row: unsigned byte value, right-aligned
    pub fn dec_row(&self) -> String {
        let mut row = String::from("Dec:  ");
        for token in &self.bytes {
            row.push_str(&format!("{:>width$}", token.decimal, width = FIELD_WIDTH));
        }
        row
    }

    /// The binary row: exactly 8 digits per byte, MSB first, each group
    /// followed by a single separating space
    pub fn bin_row(&self) -> String {
        let mut row = String::from("Bin:  ");
        for token in &self.bytes {
            row.push_str(&format!("{:08b} ", token.decimal));
        }
        row
    }

    /// All five lines in output order: echo, ASCII, hex, decimal, binary
    pub fn rows(&self) -> [String; 5] {
        [
            self.echo_line(),
            self.ascii_row(),
            self.hex_row(),
            self.dec_row(),
            self.bin_row(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::analyze;
    use super::*;

    #[test]
    fn test_echo_line_quotes_input() {
        let report = analyze("Hi");
        assert_eq!(report.echo_line(), "Input string: \"Hi\"");
    }

    #[test]
    fn test_ascii_row_alignment() {
        let report = analyze("Hi");
        assert_eq!(report.ascii_row(), "ASCII:        H        i");
    }

    #[test]
    fn test_hex_row_uppercase() {
        let report = analyze("Hi");
        assert_eq!(report.hex_row(), "Hex:         48       69");
    }

    #[test]
    fn test_dec_row_values() {
        let report = analyze("Hi");
        assert_eq!(report.dec_row(), "Dec:         72      105");
    }

    #[test]
    fn test_bin_row_fixed_width_groups() {
        let report = analyze("Hi");
        assert_eq!(report.bin_row(), "Bin:  01001000 01101001 ");
    }

    #[test]
    fn test_empty_input_rows_are_labels_only() {
        let report = analyze("");
        assert_eq!(report.echo_line(), "Input string: \"\"");
        assert_eq!(report.ascii_row(), "ASCII:");
        assert_eq!(report.hex_row(), "Hex:  ");
        assert_eq!(report.dec_row(), "Dec:  ");
        assert_eq!(report.bin_row(), "Bin:  ");
    }

    #[test]
    fn test_rows_order() {
        let report = analyze("x");
        let rows = report.rows();
        assert!(rows[0].starts_with("Input string:"));
        assert!(rows[1].starts_with("ASCII:"));
        assert!(rows[2].starts_with("Hex:"));
        assert!(rows[3].starts_with("Dec:"));
        assert!(rows[4].starts_with("Bin:"));
    }

    #[test]
    fn test_columns_share_field_width() {
        let report = analyze("abc");
        // label is 6 chars, then one FIELD_WIDTH column per byte
        assert_eq!(report.ascii_row().len(), 6 + 3 * FIELD_WIDTH);
        assert_eq!(report.hex_row().len(), 6 + 3 * FIELD_WIDTH);
        assert_eq!(report.dec_row().len(), 6 + 3 * FIELD_WIDTH);
    }

    #[test]
    fn test_json_serialization_shape() {
        let report = analyze("A");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"], "A");
        assert_eq!(json["count"], 1);
        assert_eq!(json["bytes"][0]["char"], "A");
        assert_eq!(json["bytes"][0]["hex"], "41");
        assert_eq!(json["bytes"][0]["decimal"], 65);
        assert_eq!(json["bytes"][0]["octal"], "101");
        assert_eq!(json["bytes"][0]["binary"], "01000001");
        assert_eq!(json["bytes"][0]["class"], "printable");
    }
}
