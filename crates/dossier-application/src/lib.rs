//! Application layer for Dossier.
//!
//! Coordinates the core domain with an injected content service and blob
//! store: the two-stage synthesis pipeline and the session controller that
//! routes between the live stream, the archive and a shared dossier.

pub mod session;
pub mod synthesis_pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use session::{SessionController, View};
pub use synthesis_pipeline::SynthesisPipeline;
