//! Storage layer: atomic snapshot files and the file-backed blob store.

pub mod atomic_file;
pub mod file_blob_store;

pub use atomic_file::{AtomicFileError, AtomicTextFile};
pub use file_blob_store::FileBlobStore;
