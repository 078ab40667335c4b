//! Stack-file I/O with advisory locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Overwrite a file in place while holding an exclusive advisory lock.
///
/// The file is truncated before the new content is written. There is no
/// temp-file-and-rename step, so an interrupted write can leave the file
/// partially written.
pub fn write_in_place(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.lock_exclusive().map_err(|e| Error::io(path, e))?;

    // Truncate only after the lock is held
    file.set_len(0).map_err(|e| Error::io(path, e))?;
    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;

    FileExt::unlock(&file).map_err(|e| Error::io(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_in_place_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stack.json");

        write_in_place(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_in_place_truncates_longer_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stack.json");
        fs::write(&path, "a much longer original content").unwrap();

        write_in_place(&path, b"short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_text_missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
