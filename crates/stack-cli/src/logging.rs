//! Tracing subscriber setup for the `sync_tool` binary

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "info,sync_tool=debug,stack_core=debug,stack_opsworks=debug,stack_cli=debug"
    } else {
        "info"
    }
}

/// Install a subscriber that prints to stderr.
///
/// `RUST_LOG` takes precedence over the defaults from [`default_directives`].
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_level(true)
        .without_time()
        .compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .map_err(|e| CliError::logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    Ok(())
}
