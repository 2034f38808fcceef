//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod inspect;

pub use inspect::run_inspect;
