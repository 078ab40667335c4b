//! Core of stack-sync
//!
//! Keeps the `custom-json` of a local stack-file and the custom JSON stack
//! setting of a remote stack in sync:
//!
//! - **StackFile**: load, validate and save the local document
//! - **SyncEngine**: confirmed pull and push sessions
//! - **Capabilities**: [`StackSettings`] for the remote service,
//!   [`ConfirmationProvider`] for operator opt-in, [`Reporter`] for output
//!
//! ```text
//!            stack-cli
//!                |
//!           stack-core  <-  stack-opsworks (StackSettings)
//! ```

pub mod confirm;
pub mod error;
pub mod io;
pub mod remote;
pub mod report;
pub mod stack_file;
pub mod sync;

pub use confirm::{AlwaysYes, ConfirmationProvider, parse_answer};
pub use error::{Error, Result};
pub use remote::StackSettings;
pub use report::{Reporter, Severity, TracingReporter};
pub use stack_file::{CUSTOM_JSON_KEY, STACK_ID_KEY, StackFile, is_blank};
pub use sync::{Direction, PULL_PROMPT, PUSH_PROMPT, SyncEngine, SyncOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_format_displays_path_and_reason() {
        let error = Error::format(PathBuf::from("/stacks/prod.json"), "can not find: stack-id");

        let display = format!("{}", error);
        assert!(
            display.contains("/stacks/prod.json"),
            "Error display should contain the path, got: {}",
            display
        );
        assert!(
            display.contains("stack-id"),
            "Error display should name the missing key, got: {}",
            display
        );
    }

    #[test]
    fn error_remote_displays_operation() {
        let error = Error::remote("get", "abc-123", "AccessDenied");
        assert_eq!(
            error.to_string(),
            "Remote get failed for stack abc-123: AccessDenied"
        );
    }
}
