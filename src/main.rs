//! Bank Ledger CLI
//!
//! Command-line interface for loading a flat-file bank ledger and printing
//! its accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run                  # loads ./support
//! cargo run -- path/to/data  # loads another data directory
//! ```
//!
//! The program reads `accounts.csv`, `owners.csv`, and `account_owners.csv`
//! from the data directory, links every account to its owner, and writes
//! one line per account to stdout in account-source order. Business-rule
//! notifications are emitted through the logger on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing file, malformed record, unknown ID in a link, ...)

use bank_ledger::cli;
use bank_ledger::io::write_report;
use bank_ledger::Ledger;
use std::process;

fn main() {
    // Business notifications (insufficient funds, limits) go through the
    // logger; default to `warn` so they surface without configuration.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    // Load and link the ledger; any failure here is unrecovered.
    let ledger = match Ledger::load(&args.data_dir) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = write_report(&ledger, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
