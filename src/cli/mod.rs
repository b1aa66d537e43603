//! CLI module for quotebook
//!
//! Provides command-line interface for:
//! - serve: Run the web application
//! - ping: Check database connectivity

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, DatabaseArgs, ServeArgs};
pub use commands::{ping, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

use crate::observability::init_tracing;

/// Parse arguments, start the runtime and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io_error(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(run_command(cli.command))
}
