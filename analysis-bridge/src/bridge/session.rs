use analysis_core::{AnalysisResponse, ChartConfig, ChartSettings};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::bridge::display::{render_all, render_changes, DisplaySurface};
use crate::bridge::form::AnalysisForm;
use crate::bridge::service::AnalysisService;
use crate::bridge::state::{RequestTicket, UiState};
use crate::error::BridgeError;

/// What happened to one submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Response shown on the surface
    Applied(AnalysisResponse),
    /// Refused before any request was sent
    Rejected(BridgeError),
    /// Request failed; the error is shown on the surface
    Failed(BridgeError),
    /// A newer submission was accepted while this one was in flight, so its
    /// outcome was dropped
    Superseded,
}

struct SessionInner<D> {
    state: UiState,
    surface: D,
}

impl<D: DisplaySurface> SessionInner<D> {
    fn commit(&mut self, next: UiState) {
        render_changes(&self.state, &next, &mut self.surface);
        self.state = next;
    }
}

/// Binds the UI state record to a display surface and an analysis service.
///
/// The state lock is never held across the network call, so several
/// submissions may overlap; only the latest one's outcome is applied.
pub struct AnalysisSession<S, D> {
    service: S,
    chart_settings: ChartSettings,
    inner: Mutex<SessionInner<D>>,
}

impl<S, D> AnalysisSession<S, D>
where
    S: AnalysisService,
    D: DisplaySurface,
{
    pub fn new(service: S, chart_settings: ChartSettings, mut surface: D) -> Self {
        let state = UiState::new();
        render_all(&state, &mut surface);
        Self {
            service,
            chart_settings,
            inner: Mutex::new(SessionInner { state, surface }),
        }
    }

    /// Validate the form, send it, and apply the outcome to the surface.
    pub async fn submit(&self, form: AnalysisForm) -> SubmissionOutcome {
        let prepared = match form.prepare() {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::warn!("Submission rejected: {}", e);
                let mut inner = self.inner.lock().await;
                let next = inner.state.reject_submission(&e);
                inner.commit(next);
                return SubmissionOutcome::Rejected(e);
            }
        };

        let ticket = {
            let mut inner = self.inner.lock().await;
            let (next, ticket) = inner.state.begin_submission(Utc::now());
            inner.commit(next);
            ticket
        };

        tracing::info!(
            "Submitting analysis #{}: symbol={}, market={}, trade={}, timeframe={}",
            ticket.generation,
            prepared.symbol,
            prepared.market_type,
            prepared.request.trade_type,
            prepared.timeframe
        );

        let result = self.service.analyze(&prepared.request).await;

        let mut inner = self.inner.lock().await;
        match result {
            Ok(response) => {
                if let Some(data) = &response.structured_data {
                    tracing::debug!("Price targets: {:?}", data.targets);
                }
                let chart = ChartConfig::new(
                    &self.chart_settings,
                    &prepared.symbol,
                    prepared.market_type,
                    prepared.timeframe.as_str(),
                );
                match inner.state.apply_success(&ticket, response.clone(), chart) {
                    Some(next) => {
                        inner.commit(next);
                        log_completion(&ticket, "completed");
                        SubmissionOutcome::Applied(response)
                    }
                    None => superseded(&ticket),
                }
            }
            Err(e) => match inner.state.apply_failure(&ticket, &e) {
                Some(next) => {
                    inner.commit(next);
                    tracing::error!("Analysis #{} failed: {}", ticket.generation, e);
                    SubmissionOutcome::Failed(e)
                }
                None => superseded(&ticket),
            },
        }
    }

    /// Return to the input panel.
    pub async fn back(&self) {
        let mut inner = self.inner.lock().await;
        let next = inner.state.show_input();
        inner.commit(next);
    }

    pub async fn state(&self) -> UiState {
        self.inner.lock().await.state.clone()
    }

    /// Run `f` against the attached surface.
    pub async fn with_surface<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        let inner = self.inner.lock().await;
        f(&inner.surface)
    }

    pub fn into_parts(self) -> (UiState, D) {
        let inner = self.inner.into_inner();
        (inner.state, inner.surface)
    }
}

fn log_completion(ticket: &RequestTicket, what: &str) {
    let elapsed = Utc::now() - ticket.issued_at;
    tracing::info!(
        "Analysis #{} {} in {}ms",
        ticket.generation,
        what,
        elapsed.num_milliseconds()
    );
}

fn superseded(ticket: &RequestTicket) -> SubmissionOutcome {
    log_completion(ticket, "superseded, result dropped");
    SubmissionOutcome::Superseded
}
