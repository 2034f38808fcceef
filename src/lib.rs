//! stringinspect - character encoding analysis library
//!
//! This library provides the core functionality for rendering a string's
//! bytes in four parallel views: ASCII, hexadecimal, decimal, and binary.
//!
//! # Modules
//!
//! - [`analysis`]: Byte-to-multi-radix analysis and row rendering
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`domain`]: Byte classification
//! - [`error`]: Error types

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};
