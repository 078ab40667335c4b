//! Remote stack settings capability

use serde_json::Value;

use crate::Result;

/// Access to the custom JSON stored in a remote stack's settings.
///
/// Implementations report every failure as [`crate::Error::Remote`].
pub trait StackSettings {
    /// Fetch and decode the custom JSON of `stack_id`.
    fn get_custom_json(&self, stack_id: &str) -> Result<Value>;

    /// Replace the custom JSON of `stack_id` with an already encoded JSON string.
    fn set_custom_json(&self, stack_id: &str, custom_json: &str) -> Result<()>;
}

impl<T: StackSettings + ?Sized> StackSettings for &T {
    fn get_custom_json(&self, stack_id: &str) -> Result<Value> {
        (**self).get_custom_json(stack_id)
    }

    fn set_custom_json(&self, stack_id: &str, custom_json: &str) -> Result<()> {
        (**self).set_custom_json(stack_id, custom_json)
    }
}

impl<T: StackSettings + ?Sized> StackSettings for Box<T> {
    fn get_custom_json(&self, stack_id: &str) -> Result<Value> {
        (**self).get_custom_json(stack_id)
    }

    fn set_custom_json(&self, stack_id: &str, custom_json: &str) -> Result<()> {
        (**self).set_custom_json(stack_id, custom_json)
    }
}
