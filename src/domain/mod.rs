//! Domain models for stringinspect
//!
//! Byte classification and display rules, independent of any output format.

pub mod class;

pub use class::{display_glyph, ByteClass};
