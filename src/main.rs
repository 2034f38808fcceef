//! stringinspect - character encoding analyzer
//!
//! A command-line tool that displays ASCII, hexadecimal, decimal, and
//! binary representations of each byte in the provided string.

use clap::Parser;
use stringinspect::cli::args::usage_exit_code;
use stringinspect::cli::Cli;
use stringinspect::commands::run_inspect;
use stringinspect::error::AppError;
use std::path::Path;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments. Help and version requests terminate with exit
    // code 0; any malformed argument shape is a usage error, exit code 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(&err));
        }
    };

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = run_inspect(&cli.text, cli.format, cli.output.as_deref().map(Path::new));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    if let AppError::Io(_) = err {
        eprintln!();
        eprintln!("Hint: Check that the output path exists and is writable.");
    }
}
