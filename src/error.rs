//! Unified error types for stringinspect
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
///
/// The analysis itself is total over the input domain (every byte value
/// 0-255 is representable in all four radixes), so errors only arise at
/// the output boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO error (writing the report to stdout or a file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
