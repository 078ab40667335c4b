//! Pull and push command implementations
//!
//! Wires the OpsWorks backend and the confirmation policy selected on the
//! command line into a [`SyncEngine`] session.

use std::path::Path;

use stack_core::{
    AlwaysYes, ConfirmationProvider, Direction, Reporter, StackSettings, SyncEngine, SyncOutcome,
};
use stack_opsworks::OpsWorksSettings;

use crate::cli::Cli;
use crate::error::Result;
use crate::interactive::InteractivePrompt;

/// Run the pull or push command against OpsWorks.
pub fn run_sync(cli: &Cli, reporter: &dyn Reporter) -> Result<SyncOutcome> {
    let settings = OpsWorksSettings::new(cli.opsworks_config())?;
    let direction = cli.command.direction();
    let path = cli.command.filename();

    if cli.yes {
        run_with(&settings, &AlwaysYes, reporter, direction, path)
    } else {
        run_with(&settings, &InteractivePrompt::new(), reporter, direction, path)
    }
}

/// Run one session with explicit collaborators.
pub fn run_with(
    settings: &dyn StackSettings,
    confirmation: &dyn ConfirmationProvider,
    reporter: &dyn Reporter,
    direction: Direction,
    path: &Path,
) -> Result<SyncOutcome> {
    reporter.debug(&format!("Running {} on {}", direction, path.display()));

    let engine = SyncEngine::new(settings, confirmation, reporter);
    Ok(engine.run(direction, path)?)
}
