//! Key-value blob storage capability.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{DossierError, Result};

/// Reads and writes opaque text blobs by key.
///
/// This is the only persistence capability the history needs. Implementations
/// must make `put` atomic: a subsequent `get` sees either the old or the new
/// value, never a torn write.
pub trait BlobStore: Send + Sync {
    /// Returns the blob stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory blob store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut blobs) = store.blobs.write() {
            blobs.insert(key.into(), value.into());
        }
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| DossierError::internal("memory blob store lock poisoned"))?;
        Ok(blobs.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| DossierError::internal("memory blob store lock poisoned"))?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_put_replaces_value() {
        let store = MemoryBlobStore::with_blob("k", "old");
        store.put("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    }
}
