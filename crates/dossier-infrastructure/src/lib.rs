//! File-system backed implementations for the dossier core traits.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use config_service::ConfigService;
pub use paths::DossierPaths;
pub use storage::FileBlobStore;
