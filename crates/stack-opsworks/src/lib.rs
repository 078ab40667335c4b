//! AWS OpsWorks backend for stack-sync
//!
//! Implements [`stack_core::StackSettings`] on top of the OpsWorks API:
//! custom JSON is read with `DescribeStacks` and written with `UpdateStack`.

pub mod config;
pub mod error;
pub mod settings;

pub use config::{DEFAULT_REGION, OpsWorksConfig};
pub use error::{Error, Result};
pub use settings::{OpsWorksSettings, decode_custom_json};
