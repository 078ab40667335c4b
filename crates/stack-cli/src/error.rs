//! Error types for stack-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a `sync_tool` run with exit code 1
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from stack-core
    #[error(transparent)]
    Core(#[from] stack_core::Error),

    /// Error preparing the OpsWorks backend
    #[error(transparent)]
    OpsWorks(#[from] stack_opsworks::Error),

    /// Logging could not be set up
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}

impl CliError {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
