//! Recording fake of the content service shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use dossier_core::error::{DossierError, Result};
use dossier_core::persona::fixtures::sample_profile;
use dossier_core::synthesis::{
    ContentPart, ContentService, ImageRequest, SynthesisStage, TextRequest,
};
use tokio::sync::watch;

/// Text-stage JSON for the fixture profile.
pub fn profile_json(name: &str) -> String {
    serde_json::to_string(&sample_profile(name)).unwrap()
}

#[derive(Clone, Copy)]
pub enum ImageOutcome {
    Image(&'static str, &'static str),
    TextOnly,
    Fail,
}

pub struct FakeContentService {
    text: Result<String>,
    image: ImageOutcome,
    stage: Mutex<Option<watch::Receiver<SynthesisStage>>>,
    text_requests: Mutex<Vec<TextRequest>>,
    image_requests: Mutex<Vec<ImageRequest>>,
    seen_by_text: Mutex<Option<SynthesisStage>>,
    seen_by_image: Mutex<Option<SynthesisStage>>,
}

impl FakeContentService {
    pub fn new(text: Result<String>, image: ImageOutcome) -> Self {
        Self {
            text,
            image,
            stage: Mutex::new(None),
            text_requests: Mutex::new(Vec::new()),
            image_requests: Mutex::new(Vec::new()),
            seen_by_text: Mutex::new(None),
            seen_by_image: Mutex::new(None),
        }
    }

    pub fn observe_stage(&self, receiver: watch::Receiver<SynthesisStage>) {
        *self.stage.lock().unwrap() = Some(receiver);
    }

    fn current_stage(&self) -> Option<SynthesisStage> {
        self.stage.lock().unwrap().as_ref().map(|rx| *rx.borrow())
    }

    pub fn image_calls(&self) -> usize {
        self.image_requests.lock().unwrap().len()
    }

    pub fn last_text_request(&self) -> Option<TextRequest> {
        self.text_requests.lock().unwrap().last().cloned()
    }

    pub fn last_text_prompt(&self) -> Option<String> {
        self.last_text_request().map(|r| r.prompt)
    }

    pub fn stage_seen_by_text_call(&self) -> Option<SynthesisStage> {
        *self.seen_by_text.lock().unwrap()
    }

    pub fn stage_seen_by_image_call(&self) -> Option<SynthesisStage> {
        *self.seen_by_image.lock().unwrap()
    }
}

#[async_trait]
impl ContentService for FakeContentService {
    async fn generate_text(&self, request: &TextRequest) -> Result<String> {
        self.text_requests.lock().unwrap().push(request.clone());
        *self.seen_by_text.lock().unwrap() = self.current_stage();
        tokio::task::yield_now().await;
        self.text.clone()
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<ContentPart>> {
        self.image_requests.lock().unwrap().push(request.clone());
        *self.seen_by_image.lock().unwrap() = self.current_stage();
        match self.image {
            ImageOutcome::Image(mime_type, data) => Ok(vec![
                ContentPart::Text("Portrait".to_string()),
                ContentPart::InlineData {
                    mime_type: mime_type.to_string(),
                    data: data.to_string(),
                },
            ]),
            ImageOutcome::TextOnly => Ok(vec![ContentPart::Text("No image today".to_string())]),
            ImageOutcome::Fail => Err(DossierError::service("image model overloaded")),
        }
    }
}
