//! Output formatting utilities
//!
//! Provides table and JSON output formatting for the report.

use crate::analysis::Report;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Render output to a string based on the selected format.
///
/// The returned string carries its final line terminator, so writing it
/// to stdout or to a file produces identical bytes.
pub fn render_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Table => data.to_table(),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Compact => data.to_compact(),
    };

    Ok(format!("{}\n", text))
}

/// Format and print output to stdout
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> Result<()> {
    let rendered = render_output(data, format)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes())?;

    Ok(())
}

impl TableDisplay for Report {
    fn to_table(&self) -> String {
        self.rows().join("\n")
    }
}
