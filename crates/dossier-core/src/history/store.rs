//! Bounded, persisted persona history.

use std::sync::Arc;

use super::blob::BlobStore;
use crate::error::Result;
use crate::persona::Persona;

/// Maximum number of personas kept in history.
pub const HISTORY_CAPACITY: usize = 50;

/// Blob key of the persisted history snapshot.
pub const HISTORY_KEY: &str = "persona_history";

/// Ordered persona history, newest first.
///
/// The store is the only writer of the snapshot. Every append rewrites the
/// whole snapshot through the injected [`BlobStore`].
pub struct HistoryStore {
    store: Arc<dyn BlobStore>,
    entries: Vec<Persona>,
}

impl HistoryStore {
    /// Loads the persisted snapshot.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty history.
    /// Entries that fail validation are dropped individually.
    pub fn load(store: Arc<dyn BlobStore>) -> Self {
        let mut entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Persona>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "[History] Discarding malformed history snapshot: {}",
                        e
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("[History] Failed to read history snapshot: {}", e);
                Vec::new()
            }
        };

        entries.retain(|persona| match persona.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("[History] Dropping invalid persona '{}': {}", persona.id, e);
                false
            }
        });

        if entries.len() > HISTORY_CAPACITY {
            tracing::debug!(
                "[History] Snapshot holds {} entries, keeping the newest {}",
                entries.len(),
                HISTORY_CAPACITY
            );
            entries.truncate(HISTORY_CAPACITY);
        }

        tracing::info!("[History] Loaded {} personas", entries.len());
        Self { store, entries }
    }

    /// Prepends a persona, evicts entries past the cap and persists the result.
    ///
    /// The in-memory history is updated even when persisting fails; the error is
    /// returned so the caller can report it.
    pub fn append(&mut self, persona: Persona) -> Result<()> {
        self.entries.insert(0, persona);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist()
    }

    /// Returns the persona with the given id, falling back to the newest entry.
    pub fn select(&self, id: Option<&str>) -> Option<&Persona> {
        id.and_then(|id| self.get(id)).or_else(|| self.latest())
    }

    /// Returns the persona with the given id.
    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn latest(&self) -> Option<&Persona> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[Persona] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.entries)?;
        self.store.put(HISTORY_KEY, &snapshot)
    }
}
