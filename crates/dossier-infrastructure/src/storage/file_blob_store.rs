//! Directory-backed [`BlobStore`].

use std::path::{Path, PathBuf};

use dossier_core::error::{DossierError, Result};
use dossier_core::history::BlobStore;

use super::atomic_file::AtomicTextFile;

/// Stores each key as `<root>/<key>.json`.
///
/// Keys are restricted to ASCII alphanumerics, `-` and `_` so a key can never
/// escape the root directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, key: &str) -> Result<AtomicTextFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DossierError::config(format!("invalid storage key '{}'", key)));
        }
        Ok(AtomicTextFile::new(self.root.join(format!("{}.json", key))))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.file_for(key)?.load()?)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.file_for(key)?.save(value)?;
        tracing::debug!("[FileBlobStore] Wrote '{}' ({} bytes)", key, value.len());
        Ok(())
    }
}
