//! Shared test utilities for the stack-sync workspace.
//!
//! This crate provides in-memory stand-ins for the engine's collaborators and
//! a temporary stack-file fixture. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`fakes`] — [`FakeStackSettings`], [`ScriptedConfirm`], [`RecordingReporter`]
//! - [`stack`] — [`TestStackFile`] temporary stack-file builder

pub mod fakes;
pub mod stack;

pub use fakes::{FakeStackSettings, RecordingReporter, RemoteCall, ScriptedConfirm};
pub use stack::TestStackFile;
