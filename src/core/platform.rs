//! Process-level entry helpers: argument parsing and fatal error reporting.

use clap::Parser;

use crate::core::cli::CliArgs;

/// Parse command line arguments.
pub fn get_cli_args() -> CliArgs {
    CliArgs::parse()
}

/// Print an error with its cause chain to stderr and exit with code 1.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error running spacing-audit:");
    eprintln!("{error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}
