//! The stack-file document
//!
//! A stack-file mirrors one remote stack's identifier and custom JSON:
//!
//! ```json
//! {
//!   "stack-id": "<uuid>",
//!   "custom-json": { ... }
//! }
//! ```
//!
//! Any other top-level keys are carried through untouched.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result, io};

/// Key holding the remote stack identifier
pub const STACK_ID_KEY: &str = "stack-id";

/// Key holding the custom JSON blob
pub const CUSTOM_JSON_KEY: &str = "custom-json";

/// In-memory form of a stack-file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackFile {
    /// Opaque identifier of the remote stack
    #[serde(rename = "stack-id")]
    pub stack_id: String,

    /// Custom JSON settings, `{}` when the file has none
    #[serde(rename = "custom-json")]
    pub custom_json: Value,

    /// Unrecognised top-level keys, in document order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl StackFile {
    /// Create a stack-file with an empty custom JSON object.
    pub fn new(stack_id: impl Into<String>) -> Self {
        Self {
            stack_id: stack_id.into(),
            custom_json: empty_object(),
            extra: Map::new(),
        }
    }

    /// Replace the custom JSON.
    pub fn with_custom_json(mut self, custom_json: Value) -> Self {
        self.custom_json = custom_json;
        self
    }

    /// Load a stack-file from disk.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::Parse`] if the content is not JSON
    /// - [`Error::Format`] if the document has no string `stack-id`
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read stack-file");

        let document: Value = serde_json::from_str(&content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_document(path, document)
    }

    /// Interpret an already parsed JSON document as a stack-file.
    pub fn from_document(path: &Path, document: Value) -> Result<Self> {
        let Value::Object(mut object) = document else {
            return Err(Error::format(path, "document must be a JSON object"));
        };

        // Built by hand rather than through `#[serde(flatten)]` so numbers
        // keep their exact digits under `arbitrary_precision`
        let stack_id = match object.shift_remove(STACK_ID_KEY) {
            None => {
                return Err(Error::format(
                    path,
                    format!("can not find: {}", STACK_ID_KEY),
                ));
            }
            Some(Value::String(id)) => id,
            Some(other) => {
                return Err(Error::format(
                    path,
                    format!("{} must be a string, found {}", STACK_ID_KEY, other),
                ));
            }
        };
        let custom_json = object
            .shift_remove(CUSTOM_JSON_KEY)
            .unwrap_or_else(empty_object);

        Ok(Self {
            stack_id,
            custom_json,
            extra: object,
        })
    }

    /// Render the document with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut rendered =
            serde_json::to_string_pretty(self).map_err(|source| Error::Payload { source })?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Encode the custom JSON as the string the remote service expects.
    pub fn custom_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.custom_json).map_err(|source| Error::Payload { source })
    }

    /// Overwrite the file at `path` with this document.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_string()?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "writing stack-file");
        io::write_in_place(path, content.as_bytes())
    }

    /// Whether the local custom JSON holds nothing worth protecting.
    pub fn has_blank_custom_json(&self) -> bool {
        is_blank(&self.custom_json)
    }
}

/// Returns true for `null`, `false`, zero, and empty strings, arrays or objects.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
