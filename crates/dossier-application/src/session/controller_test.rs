use std::sync::Arc;

use dossier_core::error::DossierError;
use dossier_core::history::{HISTORY_KEY, MemoryBlobStore};
use dossier_core::persona::fixtures::sample_persona;
use dossier_core::persona::Persona;
use dossier_core::share::{decode_token, share_url, token_from_url};
use dossier_core::synthesis::{
    GenderFilter, RegionFilter, SynthesisFilter, SynthesisSettings, SynthesisStage,
};
use url::Url;

use super::{SessionController, View};
use crate::synthesis_pipeline::SynthesisPipeline;
use crate::testing::{FakeContentService, ImageOutcome, profile_json};

fn base_url() -> Url {
    Url::parse("https://dossier.example/app/").unwrap()
}

fn store_with(personas: &[Persona]) -> Arc<MemoryBlobStore> {
    Arc::new(MemoryBlobStore::with_blob(
        HISTORY_KEY,
        serde_json::to_string(personas).unwrap(),
    ))
}

fn pipeline(service: Arc<FakeContentService>) -> Arc<SynthesisPipeline> {
    Arc::new(SynthesisPipeline::new(service, SynthesisSettings::default()))
}

fn working_service() -> Arc<FakeContentService> {
    Arc::new(FakeContentService::new(
        Ok(profile_json("Ada Obi")),
        ImageOutcome::Image("image/png", "AAAA"),
    ))
}

fn controller(store: Arc<MemoryBlobStore>, address: Option<&Url>) -> SessionController {
    SessionController::start(pipeline(working_service()), store, base_url(), address)
}

#[tokio::test]
async fn test_start_without_token_selects_newest() {
    let store = store_with(&[sample_persona("p2"), sample_persona("p1")]);
    let session = controller(store, None);

    assert_eq!(session.view().await, View::LiveStream);
    assert_eq!(session.active_persona().await.unwrap().id, "p2");
    assert_eq!(session.history().await.len(), 2);
}

#[tokio::test]
async fn test_start_with_empty_history_has_no_active_persona() {
    let session = controller(Arc::new(MemoryBlobStore::new()), None);
    assert!(session.active_persona().await.is_none());
    assert!(session.share_link(None).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_start_with_valid_token_enters_shared_view() {
    let store = store_with(&[sample_persona("p1")]);
    let shared = sample_persona("friend");
    let address = share_url(&base_url(), &shared).unwrap();

    let session = controller(store.clone(), Some(&address));

    assert_eq!(session.view().await, View::Shared);
    assert_eq!(session.active_persona().await.unwrap(), shared);
    // History is read, never rewritten on startup.
    assert_eq!(session.history().await.len(), 1);
    let raw = dossier_core::history::BlobStore::get(store.as_ref(), HISTORY_KEY)
        .unwrap()
        .unwrap();
    assert!(!raw.contains("friend"));
}

#[tokio::test]
async fn test_start_with_corrupt_token_falls_back() {
    let store = store_with(&[sample_persona("p1")]);
    let address = Url::parse("https://dossier.example/app/?p=%%%not-a-token").unwrap();

    let session = controller(store, Some(&address));

    assert_eq!(session.view().await, View::LiveStream);
    assert_eq!(session.active_persona().await.unwrap().id, "p1");
}

#[tokio::test]
async fn test_return_to_feed_discards_shared_context() {
    let store = store_with(&[sample_persona("p2"), sample_persona("p1")]);
    let address = share_url(&base_url(), &sample_persona("friend")).unwrap();
    let session = controller(store, Some(&address));

    let clean = session.return_to_feed().await;

    assert_eq!(clean.as_str(), "https://dossier.example/app/");
    assert!(token_from_url(&clean).is_none());
    assert_eq!(session.view().await, View::LiveStream);
    assert!(session.shared_persona().await.is_none());
    assert_eq!(session.active_persona().await.unwrap().id, "p2");
}

#[tokio::test]
async fn test_select_and_archive() {
    let store = store_with(&[sample_persona("p2"), sample_persona("p1")]);
    let session = controller(store, None);

    session.show_archive().await;
    assert_eq!(session.view().await, View::Archive);

    let picked = session.select("p1").await.unwrap();
    assert_eq!(picked.id, "p1");
    assert_eq!(session.view().await, View::LiveStream);
    assert_eq!(session.active_persona().await.unwrap().id, "p1");

    assert!(session.select("missing").await.unwrap_err().is_not_found());
    assert_eq!(session.active_persona().await.unwrap().id, "p1");
}

#[tokio::test]
async fn test_generate_appends_and_selects() {
    let store = store_with(&[sample_persona("p1")]);
    let session = controller(store, None);
    session
        .set_filter(SynthesisFilter {
            region: RegionFilter::Only("Chile".to_string()),
            gender: GenderFilter::All,
        })
        .await;

    let persona = session.generate().await.unwrap();

    let history = session.history().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, persona.id);
    assert_eq!(session.active_persona().await.unwrap().id, persona.id);
    assert!(!session.is_busy());
    assert_eq!(session.stage(), SynthesisStage::Idle);
}

#[tokio::test]
async fn test_generate_from_shared_view_returns_to_stream() {
    let address = share_url(&base_url(), &sample_persona("friend")).unwrap();
    let session = controller(Arc::new(MemoryBlobStore::new()), Some(&address));
    assert_eq!(session.view().await, View::Shared);

    let persona = session.generate().await.unwrap();

    assert_eq!(session.view().await, View::LiveStream);
    assert_eq!(session.active_persona().await.unwrap().id, persona.id);
}

#[tokio::test]
async fn test_generate_failure_leaves_state_unchanged() {
    let service = Arc::new(FakeContentService::new(
        Err(DossierError::service("down")),
        ImageOutcome::TextOnly,
    ));
    let store = store_with(&[sample_persona("p1")]);
    let session = SessionController::start(pipeline(service), store, base_url(), None);

    assert!(session.generate().await.unwrap_err().is_service());
    assert_eq!(session.history().await.len(), 1);
    assert_eq!(session.active_persona().await.unwrap().id, "p1");
    assert!(!session.is_busy());
}

#[tokio::test]
async fn test_second_generate_while_in_flight_is_busy() {
    let session = controller(Arc::new(MemoryBlobStore::new()), None);

    let (first, second) = tokio::join!(session.generate(), session.generate());

    assert!(first.is_ok());
    assert!(second.unwrap_err().is_busy());
    assert_eq!(session.history().await.len(), 1);

    // Admission reopens once the run finished.
    assert!(session.generate().await.is_ok());
}

#[tokio::test]
async fn test_share_link_and_export() {
    let store = store_with(&[sample_persona("p2"), sample_persona("p1")]);
    let session = controller(store, None);

    let link = session.share_link(Some("p1")).await.unwrap();
    let token = token_from_url(&link).unwrap();
    assert_eq!(decode_token(&token).unwrap().id, "p1");

    let text = session.export_dossier(None).await.unwrap();
    assert!(text.starts_with("Full Name: Subject p2"));

    assert!(session.export_dossier(Some("nope")).await.is_err());
}
