//! CLI argument definitions using clap derive
//!
//! Defines the argument surface and the usage exit-code mapping. Parsing
//! is a pure decision over the argument vector: exactly one positional
//! argument is accepted, help/version flags short-circuit with exit code
//! 0, and any other argument shape is a usage error with exit code 1.

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};

/// Character encoding analyzer
///
/// Displays ASCII, hexadecimal, decimal, and binary representations of
/// each byte in the provided string.
#[derive(Parser, Debug)]
#[command(name = "stringinspect")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "Example:\n  stringinspect \"Hello\"")]
pub struct Cli {
    /// Text to analyze
    pub text: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version, value_parser = clap::value_parser!(bool))]
    version: Option<bool>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable aligned rows
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Process exit code for a parse error.
///
/// Help and version requests surface as clap errors but are successful
/// terminations; every real usage error exits 1.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
