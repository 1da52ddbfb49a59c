//! Atomic text file writes.
//!
//! Snapshots are replaced as a whole: the new content goes to a hidden
//! temporary file in the same directory, is fsynced, and is renamed over the
//! target while an exclusive lock file is held.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use dossier_core::DossierError;
use fs2::FileExt;

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

impl From<AtomicFileError> for DossierError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::IoError(io) => io.into(),
            AtomicFileError::LockError(message) => DossierError::io(message),
        }
    }
}

/// A handle to a text file that is only ever replaced atomically.
#[derive(Debug, Clone)]
pub struct AtomicTextFile {
    path: PathBuf,
}

impl AtomicTextFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file.
    ///
    /// Returns `Ok(None)` when the file does not exist or holds only whitespace.
    pub fn load(&self) -> Result<Option<String>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Replaces the file content.
    pub fn save(&self, content: &str) -> Result<(), AtomicFileError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicFileError> {
        let invalid = |what: &str| {
            AtomicFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path has no {}", what),
            ))
        };

        let parent = self.path.parent().ok_or_else(|| invalid("parent directory"))?;
        let file_name = self.path.file_name().ok_or_else(|| invalid("file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock guard, released when the handle closes.
///
/// The lock file is never removed.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| AtomicFileError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTextFile::new(temp_dir.path().join("snapshot.json"));

        file.save("[1,2,3]").unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("[1,2,3]"));

        file.save("[]").unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_nonexistent_or_blank() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTextFile::new(temp_dir.path().join("missing.json"));
        assert!(file.load().unwrap().is_none());

        fs::write(file.path(), "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTextFile::new(temp_dir.path().join("a/b/snapshot.json"));

        file.save("{}").unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_lock_released_but_lock_file_kept() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTextFile::new(temp_dir.path().join("snapshot.json"));

        file.save("{}").unwrap();

        let lock_path = temp_dir.path().join("snapshot.lock");
        assert!(!temp_dir.path().join(".snapshot.json.tmp").exists());
        assert!(lock_path.exists());

        let other = File::open(&lock_path).unwrap();
        other.try_lock_exclusive().unwrap();
        FileExt::unlock(&other).unwrap();
        drop(other);

        file.save("[1]").unwrap();
        assert!(lock_path.exists());
        assert_eq!(file.load().unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_error_conversion() {
        let err: DossierError = AtomicFileError::LockError("held".to_string()).into();
        assert!(matches!(err, DossierError::Io { .. }));
    }
}
