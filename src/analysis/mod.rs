//! String analysis core
//!
//! A pure byte-to-multi-radix formatter: consumes the raw bytes of the
//! input string and produces one token per byte, plus the aligned text
//! rows built from them. No IO happens here.

pub mod analyzer;
pub mod report;

pub use analyzer::{analyze, analyze_bytes};
pub use report::{ByteToken, Report, FIELD_WIDTH};
