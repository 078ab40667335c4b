//! SyncEngine implementation
//!
//! The SyncEngine moves the custom JSON between a local stack-file and the
//! remote stack settings, asking for confirmation before anything is
//! overwritten.

use std::fmt;
use std::path::Path;

use crate::Result;
use crate::confirm::ConfirmationProvider;
use crate::remote::StackSettings;
use crate::report::Reporter;
use crate::stack_file::StackFile;

/// Question asked before a pull overwrites non-blank local custom JSON
pub const PULL_PROMPT: &str = "Do you really want to overwrite your local custom JSON?";

/// Question asked before every push
pub const PUSH_PROMPT: &str =
    "Do you really want to overwrite the OpsWorks stack-settings custom JSON?";

/// Which way the custom JSON travels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Remote to local file
    Pull,
    /// Local file to remote
    Push,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Pull => write!(f, "pull"),
            Direction::Push => write!(f, "push"),
        }
    }
}

/// How a sync session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The remote call was made and its result applied
    Completed,
    /// The operator declined; nothing was changed
    Aborted,
}

/// Engine for a single pull or push session
///
/// Every collaborator is passed in: the remote settings service, the
/// confirmation policy, and the reporter that receives operator messages.
pub struct SyncEngine<'a> {
    settings: &'a dyn StackSettings,
    confirmation: &'a dyn ConfirmationProvider,
    reporter: &'a dyn Reporter,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        settings: &'a dyn StackSettings,
        confirmation: &'a dyn ConfirmationProvider,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            settings,
            confirmation,
            reporter,
        }
    }

    /// Run a whole session against the stack-file at `path`.
    ///
    /// # Errors
    ///
    /// Fails before any remote call if the stack-file cannot be loaded.
    pub fn run(&self, direction: Direction, path: &Path) -> Result<SyncOutcome> {
        match direction {
            Direction::Pull => self.pull_file(path),
            Direction::Push => self.push_file(path),
        }
    }

    /// Load `path`, pull the remote custom JSON into it and save it back.
    ///
    /// The file is left untouched when the operator declines.
    pub fn pull_file(&self, path: &Path) -> Result<SyncOutcome> {
        self.reporter
            .info(&format!("Loading stack-file: {}", path.display()));
        let mut stack = StackFile::load(path)?;

        let outcome = self.pull(&mut stack)?;
        if outcome == SyncOutcome::Completed {
            self.reporter
                .info(&format!("Saving stack-file: {}", path.display()));
            stack.save(path)?;
        }

        self.report_outcome(outcome);
        Ok(outcome)
    }

    /// Load `path` and push its custom JSON to the remote stack.
    pub fn push_file(&self, path: &Path) -> Result<SyncOutcome> {
        self.reporter
            .info(&format!("Loading stack-file: {}", path.display()));
        let stack = StackFile::load(path)?;

        let outcome = self.push(&stack)?;
        self.report_outcome(outcome);
        Ok(outcome)
    }

    /// Replace `stack.custom_json` with the remote value.
    ///
    /// Blank local custom JSON has nothing to lose, so no confirmation is
    /// requested for it.
    pub fn pull(&self, stack: &mut StackFile) -> Result<SyncOutcome> {
        let proceed = stack.has_blank_custom_json() || self.confirmation.confirm(PULL_PROMPT)?;
        if !proceed {
            return Ok(SyncOutcome::Aborted);
        }

        self.reporter.info(&format!(
            "Fetching custom JSON of stack {} from the remote service...",
            stack.stack_id
        ));
        stack.custom_json = self.settings.get_custom_json(&stack.stack_id)?;

        Ok(SyncOutcome::Completed)
    }

    /// Send `stack.custom_json` to the remote stack as an encoded JSON string.
    ///
    /// The previous remote value is never inspected, so confirmation is
    /// always requested.
    pub fn push(&self, stack: &StackFile) -> Result<SyncOutcome> {
        if !self.confirmation.confirm(PUSH_PROMPT)? {
            return Ok(SyncOutcome::Aborted);
        }

        let encoded = stack.custom_json_string()?;
        self.reporter.info(&format!(
            "Sending custom JSON of stack {} to the remote service...",
            stack.stack_id
        ));
        self.reporter
            .debug(&format!("Encoded custom JSON is {} bytes", encoded.len()));
        self.settings.set_custom_json(&stack.stack_id, &encoded)?;

        Ok(SyncOutcome::Completed)
    }

    fn report_outcome(&self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Completed => self.reporter.info("Done."),
            SyncOutcome::Aborted => self.reporter.info("Aborted."),
        }
    }
}
