//! Confirmation before destructive overwrites

use crate::Result;

/// Asks the operator whether an overwrite may proceed.
pub trait ConfirmationProvider {
    /// Returns `Ok(true)` to proceed and `Ok(false)` to abort.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Opts in to every question, used for `--yes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysYes;

impl ConfirmationProvider for AlwaysYes {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        tracing::debug!(prompt, "auto-confirmed");
        Ok(true)
    }
}

/// Parse a free-form answer: anything starting with `y` or `Y` is a yes.
pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y' | 'Y'))
}
