//! Byte classification domain type
//!
//! Categorizes each input byte and provides a display glyph for bytes
//! that have no printable form of their own.

use serde::Serialize;
use std::fmt;

/// Category of a single input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteClass {
    /// Printable ASCII (0x20..=0x7E, excluding space)
    Printable,
    /// Space, tab, newline, carriage return
    Whitespace,
    /// ASCII control characters (including DEL)
    Control,
    /// Bytes above the ASCII range (0x80..=0xFF)
    Extended,
}

impl ByteClass {
    /// Classify a raw byte
    pub fn of(byte: u8) -> Self {
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => ByteClass::Whitespace,
            0x00..=0x1F | 0x7F => ByteClass::Control,
            0x80..=0xFF => ByteClass::Extended,
            _ => ByteClass::Printable,
        }
    }

    /// Lowercase name, as used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteClass::Printable => "printable",
            ByteClass::Whitespace => "whitespace",
            ByteClass::Control => "control",
            ByteClass::Extended => "extended",
        }
    }
}

impl fmt::Display for ByteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display glyph for a byte in machine-readable output.
///
/// Whitespace and control bytes get placeholder glyphs so a record is
/// never visually empty; everything else is the byte reinterpreted as a
/// character code.
pub fn display_glyph(byte: u8) -> String {
    match byte {
        b' ' => "\u{2423}".to_string(),  // open box
        b'\t' => "\u{21E5}".to_string(), // rightwards arrow to bar
        b'\n' => "\u{21B5}".to_string(), // downwards arrow with corner
        b'\r' => "\u{21A9}".to_string(), // leftwards arrow with hook
        0x00 => "\u{2205}".to_string(),  // empty set
        0x01..=0x1F | 0x7F => format!("<{:02X}>", byte),
        _ => (byte as char).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_printable() {
        assert_eq!(ByteClass::of(b'A'), ByteClass::Printable);
        assert_eq!(ByteClass::of(b'~'), ByteClass::Printable);
        assert_eq!(ByteClass::of(b'0'), ByteClass::Printable);
    }

    #[test]
    fn test_classify_whitespace() {
        assert_eq!(ByteClass::of(b' '), ByteClass::Whitespace);
        assert_eq!(ByteClass::of(b'\t'), ByteClass::Whitespace);
        assert_eq!(ByteClass::of(b'\n'), ByteClass::Whitespace);
        assert_eq!(ByteClass::of(b'\r'), ByteClass::Whitespace);
    }

    #[test]
    fn test_classify_control() {
        assert_eq!(ByteClass::of(0x07), ByteClass::Control);
        assert_eq!(ByteClass::of(0x00), ByteClass::Control);
        assert_eq!(ByteClass::of(0x7F), ByteClass::Control);
    }

    #[test]
    fn test_classify_extended() {
        assert_eq!(ByteClass::of(0x80), ByteClass::Extended);
        assert_eq!(ByteClass::of(0xFF), ByteClass::Extended);
    }

    #[test]
    fn test_class_display() {
        assert_eq!(ByteClass::Printable.to_string(), "printable");
        assert_eq!(ByteClass::Extended.to_string(), "extended");
    }

    #[test]
    fn test_display_glyph_placeholders() {
        assert_eq!(display_glyph(b' '), "\u{2423}");
        assert_eq!(display_glyph(b'\t'), "\u{21E5}");
        assert_eq!(display_glyph(b'\n'), "\u{21B5}");
        assert_eq!(display_glyph(b'\r'), "\u{21A9}");
        assert_eq!(display_glyph(0x00), "\u{2205}");
        assert_eq!(display_glyph(0x1B), "<1B>");
    }

    #[test]
    fn test_display_glyph_printable() {
        assert_eq!(display_glyph(b'H'), "H");
        assert_eq!(display_glyph(b'~'), "~");
    }
}
