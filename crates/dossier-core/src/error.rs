//! Error types for the Dossier application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Dossier application.
///
/// Failures are absorbed at the component that detects them; this type carries
/// them up to the point where they get logged or turned into a degraded state.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum DossierError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generative content service failed or rejected the request
    #[error("Content service error: {message}")]
    Service {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after_secs: Option<u64>,
    },

    /// The text stage returned data that does not match the persona schema
    #[error("Text stage produced unusable output: {0}")]
    TextStage(String),

    /// A synthesis run is already in flight
    #[error("A persona synthesis is already in progress")]
    Busy,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DossierError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a non-retryable Service error without a status code
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            status_code: None,
            message: message.into(),
            is_retryable: false,
            retry_after_secs: None,
        }
    }

    /// Creates a TextStage error
    pub fn text_stage(message: impl Into<String>) -> Self {
        Self::TextStage(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this error came from the content service
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Check if the failed operation may succeed when retried later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Service {
                is_retryable: true,
                ..
            }
        )
    }

    /// Check if this is an admission rejection
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DossierError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DossierError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DossierError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DossierError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DossierError>`.
pub type Result<T> = std::result::Result<T, DossierError>;
