//! Persona domain module.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain models (`Persona`, `PersonaProfile`, enums)
//! - `fixtures`: Sample personas (tests and the `test-support` feature only)

mod model;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

// Re-export public API
pub use model::{
    Education, Gender, MAX_SKILL_VALUE, MaritalStatus, Persona, PersonaProfile, Platform, Skill,
    TechnicalMetadata,
};
