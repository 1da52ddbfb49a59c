//! Two-stage persona synthesis.
//!
//! A run draws a region, picks an archetype, asks the content service for the
//! persona text, then for a portrait. The stage is published on a watch
//! channel so callers can render progress without polling.

use std::sync::Arc;

use dossier_core::error::{DossierError, Result};
use dossier_core::persona::{Persona, PersonaProfile};
use dossier_core::region::{RegionPool, random_archetype};
use dossier_core::synthesis::{
    ContentService, ImageRequest, SynthesisFilter, SynthesisSettings, SynthesisStage, TextRequest,
    first_inline_image, image_prompt, persona_response_schema, text_prompt,
};
use rand::rngs::OsRng;
use tokio::sync::{Mutex, watch};

/// Orchestrates one synthesis run at a time.
///
/// The pipeline does not reject overlapping runs itself; admission control
/// belongs to the caller (see [`crate::SessionController::generate`]).
pub struct SynthesisPipeline {
    service: Arc<dyn ContentService>,
    settings: SynthesisSettings,
    pool: Mutex<RegionPool>,
    stage: watch::Sender<SynthesisStage>,
}

impl SynthesisPipeline {
    pub fn new(service: Arc<dyn ContentService>, settings: SynthesisSettings) -> Self {
        let (stage, _) = watch::channel(SynthesisStage::Idle);
        Self {
            service,
            settings,
            pool: Mutex::new(RegionPool::global()),
            stage,
        }
    }

    /// Replaces the region pool, e.g. with a seeded one.
    pub fn with_region_pool(mut self, pool: RegionPool) -> Self {
        self.pool = Mutex::new(pool);
        self
    }

    pub fn settings(&self) -> &SynthesisSettings {
        &self.settings
    }

    /// Current stage.
    pub fn stage(&self) -> SynthesisStage {
        *self.stage.borrow()
    }

    /// Receiver that observes every stage transition.
    pub fn subscribe(&self) -> watch::Receiver<SynthesisStage> {
        self.stage.subscribe()
    }

    /// Regions left in the current pool cycle.
    pub async fn remaining_regions(&self) -> usize {
        self.pool.lock().await.remaining()
    }

    /// Runs both stages and returns the assembled persona.
    ///
    /// Fails only when the text stage fails or its output does not parse into a
    /// valid profile; in that case no image request is made. An image-stage
    /// failure or a response without inline image data yields a persona
    /// without photo.
    pub async fn synthesize(&self, filter: &SynthesisFilter) -> Result<Persona> {
        let region = self.pool.lock().await.next(filter.region.pinned());
        let archetype = random_archetype(&mut OsRng);

        let guard = StageGuard::enter(&self.stage, SynthesisStage::TextPending);
        tracing::info!(
            "[Synthesis] Text stage: region={}, gender={}, archetype={}",
            region,
            filter.gender,
            archetype
        );

        let request = TextRequest {
            model: self.settings.text_model.clone(),
            prompt: text_prompt(&region, &filter.gender, archetype),
            temperature: self.settings.temperature,
            response_schema: persona_response_schema(),
        };

        let raw = self.service.generate_text(&request).await.map_err(|e| {
            tracing::error!("[Synthesis] Text stage failed: {}", e);
            e
        })?;

        let profile = parse_profile(&raw).map_err(|e| {
            tracing::error!("[Synthesis] Text stage output rejected: {}", e);
            e
        })?;

        guard.advance(SynthesisStage::ImagePending);
        tracing::info!("[Synthesis] Image stage for '{}'", profile.full_name);

        let request = ImageRequest {
            model: self.settings.image_model.clone(),
            prompt: image_prompt(&profile),
        };

        let photo = match self.service.generate_image(&request).await {
            Ok(parts) => {
                let photo = first_inline_image(&parts);
                if photo.is_none() {
                    tracing::warn!(
                        "[Synthesis] Image stage returned {} parts without image data",
                        parts.len()
                    );
                }
                photo
            }
            Err(e) => {
                tracing::warn!("[Synthesis] Image stage failed, continuing without photo: {}", e);
                None
            }
        };

        let persona = Persona::assemble(profile, photo);
        tracing::info!(
            "[Synthesis] Completed {} ({}, photo: {})",
            persona.short_id(),
            persona.profile.full_name,
            persona.has_photo()
        );
        Ok(persona)
    }
}

/// Parses text-stage output into a validated profile.
///
/// Accepts the JSON either bare or wrapped in a Markdown code fence.
pub fn parse_profile(raw: &str) -> Result<PersonaProfile> {
    let json = strip_code_fence(raw);
    let profile: PersonaProfile =
        serde_json::from_str(json).map_err(|e| DossierError::text_stage(e.to_string()))?;
    profile
        .validate()
        .map_err(|e| DossierError::text_stage(e.to_string()))?;
    Ok(profile)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Publishes stage transitions and resets to `Idle` when dropped.
struct StageGuard<'a> {
    stage: &'a watch::Sender<SynthesisStage>,
}

impl<'a> StageGuard<'a> {
    fn enter(stage: &'a watch::Sender<SynthesisStage>, initial: SynthesisStage) -> Self {
        stage.send_replace(initial);
        Self { stage }
    }

    fn advance(&self, next: SynthesisStage) {
        self.stage.send_replace(next);
    }
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        self.stage.send_replace(SynthesisStage::Idle);
    }
}
