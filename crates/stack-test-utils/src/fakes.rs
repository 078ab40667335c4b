//! In-memory collaborators for [`stack_core::SyncEngine`].
//!
//! All fakes use interior mutability so they can be shared by reference with
//! the engine and inspected afterwards.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde_json::Value;
use stack_core::{ConfirmationProvider, Error, Reporter, Result, Severity, StackSettings};

/// One call received by [`FakeStackSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Get { stack_id: String },
    Set { stack_id: String, custom_json: String },
}

/// Remote stack settings held in a map, keyed by stack id.
///
/// Values are stored exactly as the engine sent them: the encoded string.
/// Unknown stacks fail with [`Error::Remote`], as does every call after
/// [`FakeStackSettings::fail_with`].
#[derive(Debug, Default)]
pub struct FakeStackSettings {
    stacks: RefCell<HashMap<String, String>>,
    calls: RefCell<Vec<RemoteCall>>,
    failure: RefCell<Option<String>>,
}

impl FakeStackSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stack with `custom_json`.
    pub fn with_stack(self, stack_id: &str, custom_json: &Value) -> Self {
        self.stacks
            .borrow_mut()
            .insert(stack_id.to_string(), custom_json.to_string());
        self
    }

    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    /// Raw encoded custom JSON of `stack_id`, as last set.
    pub fn raw(&self, stack_id: &str) -> Option<String> {
        self.stacks.borrow().get(stack_id).cloned()
    }

    /// Decoded custom JSON of `stack_id`.
    ///
    /// # Panics
    /// Panics if the stored string is not JSON.
    pub fn decoded(&self, stack_id: &str) -> Option<Value> {
        self.raw(stack_id).map(|raw| {
            serde_json::from_str(&raw)
                .unwrap_or_else(|e| panic!("stored custom JSON is not JSON: {e}"))
        })
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.borrow().clone()
    }

    fn check_failure(&self, operation: &'static str, stack_id: &str) -> Result<()> {
        match self.failure.borrow().as_deref() {
            Some(message) => Err(Error::remote(operation, stack_id, message)),
            None => Ok(()),
        }
    }
}

impl StackSettings for FakeStackSettings {
    fn get_custom_json(&self, stack_id: &str) -> Result<Value> {
        self.calls.borrow_mut().push(RemoteCall::Get {
            stack_id: stack_id.to_string(),
        });
        self.check_failure("get", stack_id)?;

        let stacks = self.stacks.borrow();
        let raw = stacks
            .get(stack_id)
            .ok_or_else(|| Error::remote("get", stack_id, "stack not found"))?;
        serde_json::from_str(raw).map_err(|e| Error::remote("get", stack_id, e.to_string()))
    }

    fn set_custom_json(&self, stack_id: &str, custom_json: &str) -> Result<()> {
        self.calls.borrow_mut().push(RemoteCall::Set {
            stack_id: stack_id.to_string(),
            custom_json: custom_json.to_string(),
        });
        self.check_failure("set", stack_id)?;

        let mut stacks = self.stacks.borrow_mut();
        if !stacks.contains_key(stack_id) {
            return Err(Error::remote("set", stack_id, "stack not found"));
        }
        stacks.insert(stack_id.to_string(), custom_json.to_string());
        Ok(())
    }
}

/// Answers prompts from a fixed script and records every question asked.
///
/// Running out of answers is reported as [`Error::Prompt`], the same way a
/// closed stdin would be.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Provider that must never be asked anything.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ConfirmationProvider for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::prompt(format!("no scripted answer for: {prompt}")))
    }
}

/// Collects reported messages instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }

    /// Messages of one severity, in order.
    pub fn at(&self, severity: Severity) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// The most recent info message.
    pub fn last_info(&self) -> Option<String> {
        self.at(Severity::Info).pop()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.messages
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}
