//! Command implementations for stack-cli

pub mod sync;

pub use sync::{run_sync, run_with};
