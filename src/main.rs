//! quotebook entry point
//!
//! Parses arguments, runs the command and exits non-zero on failure.
//! All logic lives in the CLI module.

use quotebook::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
