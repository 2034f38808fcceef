//! Inspect command implementation
//!
//! Analyzes the input string and writes the report to stdout or a file.

use crate::analysis::analyze;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, render_output};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Execute the inspect command
pub fn run_inspect(text: &str, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let report = analyze(text);

    match output {
        Some(path) => {
            let rendered = render_output(&report, format)?;
            fs::write(path, rendered)?;
            log::info!("report written to {}", path.display());
            Ok(())
        }
        None => print_output(&report, format),
    }
}
