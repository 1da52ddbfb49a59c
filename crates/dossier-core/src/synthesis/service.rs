//! Boundary to the generative content service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default model for the text stage.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Default model for the image stage.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Default sampling temperature for the text stage.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Structured-output request for the text stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    /// Output schema the response must conform to
    pub response_schema: serde_json::Value,
}

/// Request for the image stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
}

/// One part of a generated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentPart {
    Text(String),
    /// Binary payload, base64 encoded as delivered by the service
    InlineData { mime_type: String, data: String },
}

/// The generative content service.
///
/// Both calls are plain request/response; the service is trusted to honour
/// the output schema but its answers are still checked by the caller.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Runs a structured text generation and returns the raw JSON text.
    async fn generate_text(&self, request: &TextRequest) -> Result<String>;

    /// Runs an image generation and returns the response parts.
    async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<ContentPart>>;
}

/// Models and sampling used by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisSettings {
    pub text_model: String,
    pub image_model: String,
    pub temperature: f32,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Builds a `data:` URI from the first part carrying inline data.
///
/// Later parts are ignored. A blank MIME type is reported as `image/png`.
pub fn first_inline_image(parts: &[ContentPart]) -> Option<String> {
    parts.iter().find_map(|part| match part {
        ContentPart::InlineData { mime_type, data } if !data.is_empty() => {
            let mime_type = if mime_type.trim().is_empty() {
                "image/png"
            } else {
                mime_type.as_str()
            };
            Some(format!("data:{mime_type};base64,{data}"))
        }
        _ => None,
    })
}
