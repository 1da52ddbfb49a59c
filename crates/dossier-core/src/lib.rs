//! Dossier core: persona model, region sampling, history, share codec and the
//! synthesis boundary.

pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod persona;
pub mod region;
pub mod share;
pub mod synthesis;

// Re-export common error type
pub use error::DossierError;
