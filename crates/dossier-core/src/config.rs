//! Configuration model (`config.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::synthesis::{
    DEFAULT_IMAGE_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TEXT_MODEL, SynthesisSettings,
};

/// Default Gemini REST endpoint (model path prefix).
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default address share links are built on.
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173/";

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Gemini API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub temperature: f32,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Synthesis settings derived from this configuration.
    pub fn synthesis_settings(&self) -> SynthesisSettings {
        SynthesisSettings {
            text_model: self.text_model.clone(),
            image_model: self.image_model.clone(),
            temperature: self.temperature,
        }
    }
}

/// Share link configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

/// Storage location overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}
