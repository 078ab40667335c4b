//! Error types for stack-opsworks

/// Result type for stack-opsworks setup
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing the OpsWorks backend
///
/// Failures of the remote calls themselves are reported as
/// [`stack_core::Error::Remote`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to start async runtime: {source}")]
    Runtime {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid region: {region:?}")]
    InvalidRegion { region: String },
}
