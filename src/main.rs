//! validata CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to the validate command (via cli::run)
//! 3. Logs fatal errors to stderr
//! 4. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use validata::cli;
use validata::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal("RUN_ABORTED", &[("error", &e.to_string())]);
        std::process::exit(1);
    }
}
