//! Synthesis boundary types: stages, filters, prompts, the output schema and
//! the content service trait.

mod filter;
mod prompt;
mod schema;
mod service;
mod stage;

pub use filter::{GenderFilter, RegionFilter, SynthesisFilter, WILDCARD};
pub use prompt::{image_prompt, text_prompt};
pub use schema::persona_response_schema;
pub use service::{
    ContentPart, ContentService, DEFAULT_IMAGE_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TEXT_MODEL,
    ImageRequest, SynthesisSettings, TextRequest, first_inline_image,
};
pub use stage::SynthesisStage;
