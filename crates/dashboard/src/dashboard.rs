//! Dashboard controller.
//!
//! Every mutation of the view state and every result replacement goes
//! through [`Dashboard::reconcile`], which recomposes the full chart
//! from the current state and hands it to the renderer.

use crate::error::DashboardError;
use crate::render::Renderer;
use crate::simulation::RunTicket;
use crate::state::AppState;
use crate::surface::StatusSurface;
use crate::upload::{UploadOutcome, UploadTicket};
use simdash_data::{BackendError, ErrorKind, SimulationBackend};
use simdash_domain::DomainError;
use simdash_domain::entities::{FilePayload, SimulationResult, UploadReference};
use simdash_domain::enums::{ChartMode, Overlay};
use simdash_domain::value_objects::{ParameterForm, SimulationRequest};
use simdash_domain::view_state::ViewState;
use simdash_presentation::{ChartComposer, MetricsPresenter};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Renderer target the chart is drawn into.
pub const DEFAULT_TARGET: &str = "stockChart";

const TRANSPORT_FAILURE: &str = "An error occurred during simulation.";

/// What a simulation attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Result stored and chart rendered.
    Completed { run_id: Uuid, points: usize },
    /// The service or the transport failed; previous result kept.
    Failed {
        run_id: Uuid,
        kind: ErrorKind,
        message: String,
    },
    /// The form was incomplete; nothing was sent.
    Rejected(DomainError),
    /// Another run is in flight; nothing was sent.
    Busy,
}

/// A simulation that has been started but not sent yet.
#[derive(Debug, Clone)]
pub struct PendingRun {
    pub ticket: RunTicket,
    pub request: SimulationRequest,
}

/// Owns the application state and drives the page.
pub struct Dashboard<R: Renderer, S: StatusSurface> {
    backend: Arc<dyn SimulationBackend>,
    renderer: R,
    surface: S,
    composer: ChartComposer,
    state: AppState,
    target: String,
}

impl<R: Renderer, S: StatusSurface> Dashboard<R, S> {
    /// Creates a dashboard with the default view and syncs the controls.
    pub fn new(backend: Arc<dyn SimulationBackend>, renderer: R, surface: S) -> Self {
        let mut dashboard = Self {
            backend,
            renderer,
            surface,
            composer: ChartComposer::new(),
            state: AppState::default(),
            target: DEFAULT_TARGET.to_string(),
        };
        dashboard.sync_controls();
        dashboard
    }

    /// Sets the initial view state.
    #[must_use]
    pub fn with_view(mut self, view: ViewState) -> Self {
        self.state.view = view;
        self.sync_controls();
        self
    }

    /// Replaces the chart composer.
    #[must_use]
    pub fn with_composer(mut self, composer: ChartComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Sets the renderer target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn backend(&self) -> Arc<dyn SimulationBackend> {
        Arc::clone(&self.backend)
    }

    fn sync_controls(&mut self) {
        self.surface.set_trigger(&self.state.simulation.trigger());
        self.surface.set_active_mode(self.state.view.mode());
        self.surface.set_upload_status(self.state.upload.status().label());
    }

    // --- Upload ---

    /// Uploads a dataset and waits for the response.
    pub async fn upload(&mut self, file: FilePayload) -> UploadOutcome {
        let ticket = self.begin_upload(&file.file_name);
        let response = self.backend.upload(file).await;
        self.complete_upload(ticket, response)
    }

    /// Marks an upload as started.
    pub fn begin_upload(&mut self, file_name: &str) -> UploadTicket {
        let ticket = self.state.upload.begin(file_name);
        self.surface.set_upload_status(self.state.upload.status().label());
        ticket
    }

    /// Applies an upload response.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        response: Result<UploadReference, BackendError>,
    ) -> UploadOutcome {
        let outcome = self.state.upload.complete(ticket, response);
        if outcome == UploadOutcome::Stale {
            return outcome;
        }
        if let UploadOutcome::Failed {
            kind: ErrorKind::Application,
            message,
        } = &outcome
        {
            self.surface.alert(message);
        }
        self.surface.set_upload_status(self.state.upload.status().label());
        outcome
    }

    /// Drag entered the drop zone.
    pub fn drag_over(&mut self) {
        self.state.drop_highlight = true;
        self.surface.set_drop_highlight(true);
    }

    /// Drag left the drop zone or the file was dropped.
    pub fn drag_leave(&mut self) {
        self.state.drop_highlight = false;
        self.surface.set_drop_highlight(false);
    }

    // --- Simulation ---

    /// Submits the form and waits for the result.
    pub async fn run_simulation(&mut self, form: &ParameterForm) -> RunOutcome {
        let pending = match self.begin_simulation(form) {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let response = self.backend.run(&pending.request).await;
        self.finish_simulation(pending.ticket, response)
    }

    /// Builds the request from the form and disables the trigger.
    ///
    /// # Errors
    /// Returns the outcome to report when nothing should be sent.
    pub fn begin_simulation(&mut self, form: &ParameterForm) -> Result<PendingRun, RunOutcome> {
        if self.state.simulation.is_busy() {
            debug!("Trigger disabled, ignoring simulation request");
            return Err(RunOutcome::Busy);
        }

        let request = match form.to_request(self.state.upload.reference()) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "Incomplete simulation parameters");
                self.surface.alert(&format!("Error: {err}"));
                return Err(RunOutcome::Rejected(err));
            }
        };

        let ticket = self
            .state
            .simulation
            .begin()
            .map_err(|_| RunOutcome::Busy)?;
        self.surface.set_trigger(&self.state.simulation.trigger());
        Ok(PendingRun { ticket, request })
    }

    /// Applies a simulation response and re-enables the trigger.
    pub fn finish_simulation(
        &mut self,
        ticket: RunTicket,
        response: Result<SimulationResult, BackendError>,
    ) -> RunOutcome {
        let run_id = ticket.run_id();
        self.state.simulation.finish(&ticket);
        self.surface.set_trigger(&self.state.simulation.trigger());

        let stored = response.and_then(|result| {
            let points = result.len();
            self.state.results.replace(result)?;
            Ok(points)
        });

        match stored {
            Ok(points) => {
                if let Some(result) = self.state.results.current() {
                    let metrics = MetricsPresenter::present(&result.metrics);
                    self.surface.show_metrics(&metrics);
                }
                self.reconcile_logged();
                RunOutcome::Completed { run_id, points }
            }
            Err(err) => {
                let kind = err.kind();
                error!(run_id = %run_id, error = %err, "Simulation failed");
                match kind {
                    ErrorKind::Application => self.surface.alert(&format!("Error: {err}")),
                    ErrorKind::Transport => self.surface.alert(TRANSPORT_FAILURE),
                }
                RunOutcome::Failed {
                    run_id,
                    kind,
                    message: err.to_string(),
                }
            }
        }
    }

    // --- View toggles ---

    /// Mode button clicked.
    pub fn select_mode(&mut self, mode: ChartMode) -> Option<usize> {
        let changed = self.state.view.select_mode(mode);
        debug!(mode = mode.as_str(), changed, "Chart mode selected");
        self.surface.set_active_mode(mode);
        self.reconcile_logged()
    }

    /// Overlay checkbox changed.
    pub fn toggle_overlay(&mut self, overlay: Overlay, enabled: bool) -> Option<usize> {
        let changed = self.state.view.set_overlay(overlay, enabled);
        debug!(overlay = overlay.as_str(), enabled, changed, "Overlay toggled");
        self.reconcile_logged()
    }

    // --- Reconciliation ---

    /// Recomposes the chart from the current state and renders it.
    ///
    /// Returns the number of traces drawn, or `None` when there is no
    /// result to draw yet.
    ///
    /// # Errors
    /// Returns an error if the renderer fails.
    pub fn reconcile(&mut self) -> Result<Option<usize>, DashboardError> {
        let Some(chart) = self
            .composer
            .compose(self.state.results.current(), &self.state.view)
        else {
            debug!("No result yet, skipping render");
            return Ok(None);
        };

        self.surface
            .set_chart_notice(chart.notices.first().map(|n| n.message()));
        self.renderer.render(&self.target, &chart)?;

        info!(
            target_id = %self.target,
            mode = self.state.view.mode().as_str(),
            traces = chart.traces.len(),
            revision = self.state.results.revision(),
            "Chart rendered"
        );
        Ok(Some(chart.traces.len()))
    }

    fn reconcile_logged(&mut self) -> Option<usize> {
        match self.reconcile() {
            Ok(traces) => traces,
            Err(err) => {
                error!(error = %err, "Chart render failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryRenderer;
    use crate::surface::MemorySurface;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use simdash_domain::entities::{IndicatorSeries, OhlcSeries, SimulationMetrics};
    use std::sync::Mutex;

    struct FakeBackend {
        results: Mutex<Vec<Result<SimulationResult, BackendError>>>,
        requests: Mutex<Vec<SimulationRequest>>,
    }

    impl FakeBackend {
        fn new(results: Vec<Result<SimulationResult, BackendError>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SimulationBackend for FakeBackend {
        async fn upload(&self, file: FilePayload) -> Result<UploadReference, BackendError> {
            if file.file_name.ends_with(".csv") {
                Ok(UploadReference::new(
                    format!("/tmp/{}", file.file_name),
                    file.file_name,
                ))
            } else {
                Err(BackendError::Remote(
                    "Invalid file type. Only CSV files are allowed.".into(),
                ))
            }
        }

        async fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, BackendError> {
            self.requests.lock().unwrap().push(request.clone());
            self.results.lock().unwrap().remove(0)
        }
    }

    fn sample(with_ohlc: bool) -> SimulationResult {
        SimulationResult {
            dates: vec!["2024-01-02".into(), "2024-01-03".into()],
            actual_prices: vec![100.0, 101.0],
            predicted_prices: Some(vec![100.5, 100.8]),
            ohlc: with_ohlc.then(|| OhlcSeries {
                open: vec![99.0, 100.0],
                high: vec![101.0, 102.0],
                low: vec![98.0, 99.0],
                close: vec![100.0, 101.0],
            }),
            indicators: IndicatorSeries {
                sma: Some(vec![100.0, 100.5]),
                ema: None,
            },
            metrics: SimulationMetrics {
                net_profit: dec!(12345.678),
                final_value: dec!(112345.678),
                roi: dec!(5.1),
                total_trades: 7,
                sharpe_ratio: dec!(1.23456),
                max_drawdown: dec!(3.2),
            },
        }
    }

    fn dashboard(
        backend: Arc<FakeBackend>,
    ) -> Dashboard<MemoryRenderer, MemorySurface> {
        Dashboard::new(backend, MemoryRenderer::new(), MemorySurface::new())
    }

    fn form() -> ParameterForm {
        ParameterForm::new("3", "10", "10000")
    }

    #[tokio::test]
    async fn test_toggles_before_any_result_render_nothing() {
        let mut dash = dashboard(FakeBackend::new(vec![]));

        assert_eq!(dash.select_mode(ChartMode::Candle), None);
        assert_eq!(dash.toggle_overlay(Overlay::Sma, false), None);

        assert!(dash.renderer().frames().is_empty());
        assert_eq!(dash.surface().active_mode, ChartMode::Candle);
    }

    #[tokio::test]
    async fn test_successful_run_presents_and_renders() {
        let backend = FakeBackend::new(vec![Ok(sample(true))]);
        let mut dash = dashboard(backend.clone());

        let outcome = dash.run_simulation(&form()).await;

        assert!(matches!(outcome, RunOutcome::Completed { points: 2, .. }));
        let surface = dash.surface();
        assert!(surface.trigger.enabled);
        assert_eq!(surface.trigger.label, "Start Simulation");
        assert_eq!(surface.metrics.as_ref().unwrap().net_profit, "₹12,345.68");
        assert_eq!(
            dash.renderer().last_trace_names(),
            vec!["Actual Price", "Predicted", "SMA (5)"]
        );
        assert!(backend.requests.lock().unwrap()[0].filepath.is_none());
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_chart() {
        let backend = FakeBackend::new(vec![
            Ok(sample(true)),
            Err(BackendError::Remote("Data file not found".into())),
        ]);
        let mut dash = dashboard(backend);

        dash.run_simulation(&form()).await;
        dash.reconcile().unwrap();
        let before = dash.renderer().last().unwrap().figure.clone();

        let outcome = dash.run_simulation(&form()).await;
        assert!(matches!(
            outcome,
            RunOutcome::Failed {
                kind: ErrorKind::Application,
                ..
            }
        ));
        assert_eq!(dash.surface().last_alert(), Some("Error: Data file not found"));
        assert!(dash.surface().trigger.enabled);

        dash.reconcile().unwrap();
        assert_eq!(dash.renderer().last().unwrap().figure, before);
        assert_eq!(dash.state().results.revision(), 1);
    }

    #[tokio::test]
    async fn test_malformed_result_is_reported_and_discarded() {
        let mut ragged = sample(false);
        ragged.actual_prices.push(1.0);
        let mut dash = dashboard(FakeBackend::new(vec![Ok(ragged)]));

        let outcome = dash.run_simulation(&form()).await;

        assert!(matches!(outcome, RunOutcome::Failed { .. }));
        assert!(dash.state().results.current().is_none());
        assert!(dash.surface().metrics.is_none());
        assert!(dash.renderer().frames().is_empty());
    }

    #[tokio::test]
    async fn test_blank_field_is_rejected_without_request() {
        let backend = FakeBackend::new(vec![]);
        let mut dash = dashboard(backend.clone());

        let outcome = dash
            .run_simulation(&ParameterForm::new("", "10", "10000"))
            .await;

        assert_eq!(
            outcome,
            RunOutcome::Rejected(DomainError::MissingParameter("epochs"))
        );
        assert!(backend.requests.lock().unwrap().is_empty());
        assert!(dash.surface().trigger.enabled);
    }

    #[tokio::test]
    async fn test_trigger_click_while_busy_is_ignored() {
        let mut dash = dashboard(FakeBackend::new(vec![]));

        let pending = dash.begin_simulation(&form()).unwrap();
        assert!(!dash.surface().trigger.enabled);
        assert!(matches!(dash.begin_simulation(&form()), Err(RunOutcome::Busy)));

        let outcome = dash.finish_simulation(
            pending.ticket,
            Err(BackendError::Remote("stopped".into())),
        );
        assert!(matches!(outcome, RunOutcome::Failed { .. }));
        assert!(dash.surface().trigger.enabled);
    }

    #[tokio::test]
    async fn test_transport_failure_alert_is_generic() {
        let decode = serde_json::from_str::<serde_json::Value>("oops").unwrap_err();
        let mut dash = dashboard(FakeBackend::new(vec![Err(BackendError::Decode {
            status: 502,
            source: decode,
        })]));

        dash.run_simulation(&form()).await;

        assert_eq!(
            dash.surface().last_alert(),
            Some("An error occurred during simulation.")
        );
    }

    #[tokio::test]
    async fn test_upload_path_forwarded_to_simulation() {
        let backend = FakeBackend::new(vec![Ok(sample(true))]);
        let mut dash = dashboard(backend.clone());

        let outcome = dash.upload(FilePayload::new("abc.csv", b"x".to_vec())).await;
        assert!(matches!(outcome, UploadOutcome::Accepted(_)));
        assert_eq!(dash.surface().upload_status, "abc.csv");

        dash.run_simulation(&form()).await;
        assert_eq!(
            backend.requests.lock().unwrap()[0].filepath.as_deref(),
            Some("/tmp/abc.csv")
        );
    }

    #[tokio::test]
    async fn test_rejected_upload_alerts_and_marks_failed() {
        let mut dash = dashboard(FakeBackend::new(vec![]));

        dash.upload(FilePayload::new("abc.csv", b"x".to_vec())).await;
        dash.upload(FilePayload::new("notes.txt", b"x".to_vec())).await;

        let surface = dash.surface();
        assert_eq!(surface.upload_status, "Upload Failed");
        assert_eq!(
            surface.last_alert(),
            Some("Invalid file type. Only CSV files are allowed.")
        );
        assert_eq!(
            dash.state().upload.reference().unwrap().path,
            "/tmp/abc.csv"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upload_marks_failed_without_alert() {
        let mut dash = dashboard(FakeBackend::new(vec![]));
        dash.upload(FilePayload::new("abc.csv", b"x".to_vec())).await;

        let ticket = dash.begin_upload("next.csv");
        assert_eq!(dash.surface().upload_status, "Uploading...");
        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let outcome = dash.complete_upload(
            ticket,
            Err(BackendError::Decode {
                status: 502,
                source: decode,
            }),
        );

        assert!(matches!(
            outcome,
            UploadOutcome::Failed {
                kind: ErrorKind::Transport,
                ..
            }
        ));
        let surface = dash.surface();
        assert_eq!(surface.upload_status, "Upload Failed");
        assert!(surface.alerts.is_empty());
        assert_eq!(
            dash.state().upload.reference(),
            Some(&UploadReference::new("/tmp/abc.csv", "abc.csv"))
        );
    }

    #[tokio::test]
    async fn test_candle_without_ohlc_shows_notice() {
        let mut dash = dashboard(FakeBackend::new(vec![Ok(sample(false))]));
        dash.run_simulation(&form()).await;
        assert!(dash.surface().chart_notice.is_none());

        let traces = dash.select_mode(ChartMode::Candle);

        assert_eq!(traces, Some(2));
        assert!(dash.surface().chart_notice.is_some());
        assert_eq!(
            dash.renderer().last_trace_names(),
            vec!["Predicted", "SMA (5)"]
        );

        dash.select_mode(ChartMode::Line);
        assert!(dash.surface().chart_notice.is_none());
    }

    #[tokio::test]
    async fn test_every_toggle_rerenders() {
        let mut dash = dashboard(FakeBackend::new(vec![Ok(sample(true))]));
        dash.run_simulation(&form()).await;
        let frames = dash.renderer().frames().len();

        dash.toggle_overlay(Overlay::Ema, true);
        dash.toggle_overlay(Overlay::Ema, true);
        dash.select_mode(ChartMode::Line);

        assert_eq!(dash.renderer().frames().len(), frames + 3);
    }

    #[tokio::test]
    async fn test_drag_highlight() {
        let mut dash = dashboard(FakeBackend::new(vec![]));
        dash.drag_over();
        assert!(dash.surface().drop_highlight);
        dash.drag_leave();
        assert!(!dash.state().drop_highlight);
    }
}
