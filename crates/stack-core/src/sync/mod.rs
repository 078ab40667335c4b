//! Pull and push sessions between a stack-file and the remote stack
//!
//! - **pull**: overwrite the local custom JSON with the remote value
//! - **push**: overwrite the remote custom JSON with the local value

mod engine;

pub use engine::{Direction, PULL_PROMPT, PUSH_PROMPT, SyncEngine, SyncOutcome};
