//! Transaction Log Filter CLI
//!
//! # Usage
//!
//! ```bash
//! trx-filter -d ./logs -s 2025-06-28T00:00:00+07:00 -e 2025-07-03T00:00:00+07:00
//! ```
//!
//! Scans the CSV transaction logs in the given directory and writes every
//! record whose timestamp falls in `[start, end)` to `filtered_result.csv`
//! in the working directory, preserving the original line text and order.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad arguments, missing directory, parse failure, I/O failure)

use std::process;
use trx_filter::cli;
use trx_filter::{FilterEngine, FilterError, RunSummary, TimeWindow, OUTPUT_FILE};

fn main() {
    let args = cli::parse_args();

    match run(&args) {
        Ok(summary) => {
            println!(
                "successfully filtered the data: wrote {} record(s) from {} file(s) to {}",
                summary.records_written, summary.files_scanned, OUTPUT_FILE
            );
        }
        Err(e) => {
            eprintln!("unable to filter the data: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &cli::CliArgs) -> Result<RunSummary, FilterError> {
    let window = TimeWindow::parse(&args.start, &args.end)?;
    FilterEngine::new(window).run(&args.directory)
}
