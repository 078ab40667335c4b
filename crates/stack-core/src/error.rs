//! Error types for stack-core

use std::path::PathBuf;

/// Result type for stack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, saving or syncing a stack-file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Stack-file cannot be read or written
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stack-file is not valid JSON
    #[error("Failed to parse stack-file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Stack-file is valid JSON but not a stack-file document
    #[error("Format broken in {path}: {message}")]
    Format { path: PathBuf, message: String },

    /// The remote stack settings service failed
    #[error("Remote {operation} failed for stack {stack_id}: {message}")]
    Remote {
        operation: &'static str,
        stack_id: String,
        message: String,
    },

    /// Local custom JSON could not be encoded for the remote service
    #[error("Cannot encode custom JSON: {source}")]
    Payload {
        #[source]
        source: serde_json::Error,
    },

    /// The confirmation provider could not obtain an answer
    #[error("Prompt failed: {message}")]
    Prompt { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn remote(
        operation: &'static str,
        stack_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Remote {
            operation,
            stack_id: stack_id.into(),
            message: message.into(),
        }
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}
