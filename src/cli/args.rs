//! CLI argument definitions using clap
//!
//! Commands:
//! - validata validate --input <csv> [--output <csv>] [--report <txt>] [--delimiter <char>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// validata - strict batch validation for customer records
#[derive(Parser, Debug)]
#[command(name = "validata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a customer batch: partition it and report failures
    Validate {
        /// Input CSV file with a header row
        #[arg(long)]
        input: PathBuf,

        /// Destination for valid records (default: <input stem>_valid.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Destination for the error report
        /// (default: <input stem>_errors_<timestamp>.txt)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
