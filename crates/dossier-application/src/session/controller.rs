use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dossier_core::error::{DossierError, Result};
use dossier_core::export::dossier_summary;
use dossier_core::history::{BlobStore, HistoryStore};
use dossier_core::persona::Persona;
use dossier_core::share::{decode_token, share_url, strip_share, token_from_url};
use dossier_core::synthesis::{SynthesisFilter, SynthesisStage};
use tokio::sync::{RwLock, watch};
use url::Url;

use super::view::View;
use crate::synthesis_pipeline::SynthesisPipeline;

struct SessionState {
    history: HistoryStore,
    view: View,
    selected_id: Option<String>,
    shared: Option<Persona>,
    filter: SynthesisFilter,
}

impl SessionState {
    fn active(&self) -> Option<&Persona> {
        match self.view {
            View::Shared => self.shared.as_ref(),
            View::LiveStream | View::Archive => self.history.select(self.selected_id.as_deref()),
        }
    }

    /// Resolves an explicit id (history or the shared persona) or the active persona.
    fn resolve(&self, id: Option<&str>) -> Result<&Persona> {
        match id {
            Some(id) => self
                .shared
                .as_ref()
                .filter(|p| p.id == id)
                .or_else(|| self.history.get(id))
                .ok_or_else(|| DossierError::not_found("persona", id)),
            None => self
                .active()
                .ok_or_else(|| DossierError::not_found("persona", "active")),
        }
    }

    fn leave_shared(&mut self) {
        if self.shared.take().is_some() {
            tracing::info!("[Session] Discarded shared context");
        }
    }
}

/// Owns the active selection and routes between the three views.
///
/// Personas are never modified here; new ones only enter through the
/// pipeline and the history store.
pub struct SessionController {
    pipeline: Arc<SynthesisPipeline>,
    state: RwLock<SessionState>,
    base_url: Url,
    in_flight: AtomicBool,
}

impl SessionController {
    /// Starts a session.
    ///
    /// When `address` carries a share token that decodes, the session opens in
    /// the shared view with that persona. Otherwise it opens on the live stream
    /// with the newest history entry selected. History is loaded in both cases
    /// but only written by [`Self::generate`].
    pub fn start(
        pipeline: Arc<SynthesisPipeline>,
        store: Arc<dyn BlobStore>,
        base_url: Url,
        address: Option<&Url>,
    ) -> Self {
        let history = HistoryStore::load(store);

        let shared = address
            .and_then(token_from_url)
            .and_then(|token| match decode_token(&token) {
                Ok(persona) => Some(persona),
                Err(e) => {
                    tracing::warn!("[Session] Ignoring share token: {}", e);
                    None
                }
            });

        let (view, selected_id) = match &shared {
            Some(persona) => {
                tracing::info!("[Session] Opened shared persona {}", persona.short_id());
                (View::Shared, None)
            }
            None => (View::LiveStream, history.latest().map(|p| p.id.clone())),
        };

        Self {
            pipeline,
            state: RwLock::new(SessionState {
                history,
                view,
                selected_id,
                shared,
                filter: SynthesisFilter::default(),
            }),
            base_url: strip_share(&base_url),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn pipeline(&self) -> &Arc<SynthesisPipeline> {
        &self.pipeline
    }

    pub async fn view(&self) -> View {
        self.state.read().await.view
    }

    pub async fn show_live_stream(&self) {
        let mut state = self.state.write().await;
        state.leave_shared();
        state.view = View::LiveStream;
    }

    pub async fn show_archive(&self) {
        let mut state = self.state.write().await;
        state.leave_shared();
        state.view = View::Archive;
    }

    /// Drops the shared context, selects the newest history entry and returns
    /// the clean address (no share parameter).
    pub async fn return_to_feed(&self) -> Url {
        let mut state = self.state.write().await;
        state.leave_shared();
        state.view = View::LiveStream;
        let newest = state.history.latest().map(|p| p.id.clone());
        state.selected_id = newest;
        self.base_url.clone()
    }

    /// Selects a history entry and shows it on the live stream.
    pub async fn select(&self, id: &str) -> Result<Persona> {
        let mut state = self.state.write().await;
        let persona = state
            .history
            .get(id)
            .cloned()
            .ok_or_else(|| DossierError::not_found("persona", id))?;

        state.leave_shared();
        state.selected_id = Some(persona.id.clone());
        state.view = View::LiveStream;
        Ok(persona)
    }

    /// The persona currently shown: the shared one in the shared view,
    /// otherwise the selected history entry (newest when the selection is stale).
    pub async fn active_persona(&self) -> Option<Persona> {
        self.state.read().await.active().cloned()
    }

    pub async fn shared_persona(&self) -> Option<Persona> {
        self.state.read().await.shared.clone()
    }

    /// History entries, newest first.
    pub async fn history(&self) -> Vec<Persona> {
        self.state.read().await.history.entries().to_vec()
    }

    pub async fn filter(&self) -> SynthesisFilter {
        self.state.read().await.filter.clone()
    }

    pub async fn set_filter(&self, filter: SynthesisFilter) {
        self.state.write().await.filter = filter;
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn stage(&self) -> SynthesisStage {
        self.pipeline.stage()
    }

    pub fn subscribe_stage(&self) -> watch::Receiver<SynthesisStage> {
        self.pipeline.subscribe()
    }

    /// Runs one synthesis with the current filter.
    ///
    /// Only one run may be in flight; a concurrent call fails with
    /// [`DossierError::Busy`] without touching the pipeline. On success the
    /// persona is appended to history and selected, and a shared view falls
    /// back to the live stream. A failed history write is logged and does not
    /// fail the run.
    pub async fn generate(&self) -> Result<Persona> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("[Session] Generate rejected, synthesis already in flight");
            return Err(DossierError::Busy);
        }
        let _flight = InFlight(&self.in_flight);

        let filter = self.filter().await;
        let persona = self.pipeline.synthesize(&filter).await?;

        let mut state = self.state.write().await;
        if let Err(e) = state.history.append(persona.clone()) {
            tracing::error!("[Session] Failed to persist history: {}", e);
        }
        state.selected_id = Some(persona.id.clone());
        if state.view == View::Shared {
            state.leave_shared();
            state.view = View::LiveStream;
        }

        Ok(persona)
    }

    /// Share address for a persona (the active one when `id` is `None`).
    pub async fn share_link(&self, id: Option<&str>) -> Result<Url> {
        let state = self.state.read().await;
        let persona = state.resolve(id)?;
        share_url(&self.base_url, persona)
    }

    /// Plain-text summary of a persona (the active one when `id` is `None`).
    pub async fn export_dossier(&self, id: Option<&str>) -> Result<String> {
        let state = self.state.read().await;
        Ok(dossier_summary(state.resolve(id)?))
    }
}

/// Clears the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
