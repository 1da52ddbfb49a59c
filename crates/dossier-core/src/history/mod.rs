//! Persona history and its persistence capability.

mod blob;
mod store;

pub use blob::{BlobStore, MemoryBlobStore};
pub use store::{HISTORY_CAPACITY, HISTORY_KEY, HistoryStore};
