//! `sync_tool`: keep a local stack-file and an OpsWorks stack's custom JSON
//! in sync.
//!
//! Usage:
//!     sync_tool [-y|--yes] pull <filename>
//!     sync_tool [-y|--yes] push <filename>

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;
use stack_core::{Reporter, SyncOutcome, TracingReporter};

use cli::Cli;
use error::Result;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1 like every other fatal error; help and version exit 0
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "error".red().bold(), e);
    }

    let reporter = TracingReporter;
    if let Err(e) = run(&cli, &reporter) {
        reporter.critical(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<SyncOutcome> {
    tracing::debug!(command = ?cli.command, region = %cli.region, "starting");
    commands::run_sync(cli, reporter)
}
