//! [`TestStackFile`] fixture for stack-file scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A stack-file inside its own temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use stack_test_utils::TestStackFile;
///
/// let file = TestStackFile::with_json(r#"{"stack-id": "abc-123"}"#);
/// assert!(file.path().exists());
/// ```
pub struct TestStackFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestStackFile {
    /// A path in a fresh temporary directory where nothing exists yet.
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stack.json");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// A stack-file containing exactly `content`.
    pub fn with_json(content: &str) -> Self {
        let fixture = Self::missing();
        fixture.write(content);
        fixture
    }

    /// A stack-file holding `document`, pretty-printed.
    pub fn with_document(document: &Value) -> Self {
        Self::with_json(&serde_json::to_string_pretty(document).unwrap())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, content: &str) {
        fs::write(&self.path, content)
            .unwrap_or_else(|e| panic!("TestStackFile: failed to write {}: {e}", self.path.display()));
    }

    /// Current raw content of the stack-file.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", self.path.display()))
    }

    /// Current content of the stack-file parsed as JSON.
    pub fn read_json(&self) -> Value {
        serde_json::from_str(&self.read())
            .unwrap_or_else(|e| panic!("{} is not JSON: {e}", self.path.display()))
    }
}
