//! Event loop.
//!
//! User events and network completions are handled strictly one at a
//! time. Network calls run as tasks in a [`JoinSet`], so the loop never
//! blocks on a request and later user events can overtake earlier
//! requests. A task that dies still completes its request as a
//! transport failure.

use crate::dashboard::Dashboard;
use crate::render::Renderer;
use crate::simulation::RunTicket;
use crate::surface::StatusSurface;
use crate::upload::UploadTicket;
use simdash_data::BackendError;
use simdash_domain::entities::{FilePayload, SimulationResult, UploadReference};
use simdash_domain::enums::{ChartMode, Overlay};
use simdash_domain::value_objects::ParameterForm;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::{self, JoinError, JoinSet};
use tracing::{debug, info, warn};

/// A user action on the page.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// File picked in the file dialog.
    FileSelected(FilePayload),
    /// Drag entered the drop zone.
    DragOver,
    /// Drag left the drop zone.
    DragLeave,
    /// File dropped on the drop zone.
    FileDropped(FilePayload),
    /// Simulation trigger clicked with the current control values.
    TrainClicked(ParameterForm),
    /// Mode button clicked.
    ModeSelected(ChartMode),
    /// Overlay checkbox changed.
    OverlayToggled(Overlay, bool),
}

/// A request whose task is still running.
#[derive(Debug)]
enum InFlight {
    Upload(UploadTicket),
    Simulation(RunTicket),
}

/// What a request task returned.
#[derive(Debug)]
enum Reply {
    Upload(Result<UploadReference, BackendError>),
    Simulation(Result<SimulationResult, BackendError>),
}

/// Running request tasks and the tickets they answer.
#[derive(Default)]
struct Requests {
    tasks: JoinSet<Reply>,
    tickets: HashMap<task::Id, InFlight>,
}

impl Requests {
    fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn spawn<F>(&mut self, ticket: InFlight, request: F)
    where
        F: Future<Output = Reply> + Send + 'static,
    {
        let handle = self.tasks.spawn(request);
        self.tickets.insert(handle.id(), ticket);
    }

    /// Pairs a finished task with its ticket.
    fn settle(&mut self, joined: Result<(task::Id, Reply), JoinError>) -> Option<(InFlight, Reply)> {
        let (id, reply) = match joined {
            Ok((id, reply)) => (id, Some(reply)),
            Err(err) => {
                warn!(error = %err, "Request task stopped without a response");
                (err.id(), None)
            }
        };
        let ticket = self.tickets.remove(&id)?;
        let reply = reply.unwrap_or_else(|| interrupted(&ticket));
        Some((ticket, reply))
    }
}

fn interrupted(ticket: &InFlight) -> Reply {
    let err = || BackendError::Interrupted("request task stopped".to_string());
    match ticket {
        InFlight::Upload(_) => Reply::Upload(Err(err())),
        InFlight::Simulation(_) => Reply::Simulation(Err(err())),
    }
}

impl<R: Renderer, S: StatusSurface> Dashboard<R, S> {
    /// Processes events until the sender side is closed, then waits for
    /// requests still in flight.
    pub async fn run(&mut self, mut events: mpsc::Receiver<DashboardEvent>) {
        let mut requests = Requests::default();
        let mut open = true;

        info!("Dashboard event loop started");
        while open || !requests.is_empty() {
            tokio::select! {
                event = events.recv(), if open => match event {
                    Some(event) => self.dispatch(event, &mut requests),
                    None => {
                        debug!(pending = requests.tasks.len(), "Event source closed");
                        open = false;
                    }
                },
                Some(joined) = requests.tasks.join_next_with_id() => {
                    match requests.settle(joined) {
                        Some((ticket, reply)) => self.apply(ticket, reply),
                        None => debug!("Response for an untracked request"),
                    }
                }
            }
        }
        info!("Dashboard event loop stopped");
    }

    /// Handles one event, starting a request task when it needs one.
    fn dispatch(&mut self, event: DashboardEvent, requests: &mut Requests) {
        match event {
            DashboardEvent::FileSelected(file) => self.spawn_upload(file, requests),
            DashboardEvent::FileDropped(file) => {
                self.drag_leave();
                self.spawn_upload(file, requests);
            }
            DashboardEvent::DragOver => self.drag_over(),
            DashboardEvent::DragLeave => self.drag_leave(),
            DashboardEvent::TrainClicked(form) => match self.begin_simulation(&form) {
                Ok(pending) => {
                    let backend = self.backend();
                    let request = pending.request;
                    requests.spawn(InFlight::Simulation(pending.ticket), async move {
                        Reply::Simulation(backend.run(&request).await)
                    });
                }
                Err(outcome) => debug!(?outcome, "Simulation not started"),
            },
            DashboardEvent::ModeSelected(mode) => {
                self.select_mode(mode);
            }
            DashboardEvent::OverlayToggled(overlay, enabled) => {
                self.toggle_overlay(overlay, enabled);
            }
        }
    }

    fn spawn_upload(&mut self, file: FilePayload, requests: &mut Requests) {
        let ticket = self.begin_upload(&file.file_name);
        let backend = self.backend();
        requests.spawn(InFlight::Upload(ticket), async move {
            Reply::Upload(backend.upload(file).await)
        });
    }

    fn apply(&mut self, ticket: InFlight, reply: Reply) {
        match (ticket, reply) {
            (InFlight::Upload(ticket), Reply::Upload(response)) => {
                debug!(seq = ticket.seq(), file = ticket.file_name(), "Upload response");
                self.complete_upload(ticket, response);
            }
            (InFlight::Simulation(ticket), Reply::Simulation(response)) => {
                debug!(run_id = %ticket.run_id(), "Simulation response");
                self.finish_simulation(ticket, response);
            }
            (ticket, reply) => {
                warn!(?ticket, ?reply, "Response does not match its request");
                let fallback = interrupted(&ticket);
                self.apply(ticket, fallback);
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
    use simdash_data::SimulationBackend;
    use simdash_domain::value_objects::SimulationRequest;
    use std::sync::Arc;
    use std::time::Duration;

    /// Backend whose tasks die before answering.
    struct CrashingBackend;

    #[async_trait]
    impl SimulationBackend for CrashingBackend {
        async fn upload(&self, _file: FilePayload) -> Result<UploadReference, BackendError> {
            panic!("upload task crashed");
        }

        async fn run(&self, _request: &SimulationRequest) -> Result<SimulationResult, BackendError> {
            panic!("run task crashed");
        }
    }

    fn dashboard() -> Dashboard<MemoryRenderer, MemorySurface> {
        Dashboard::new(
            Arc::new(CrashingBackend),
            MemoryRenderer::new(),
            MemorySurface::new(),
        )
    }

    #[tokio::test]
    async fn test_crashed_run_reenables_trigger_and_stops_loop() {
        let mut dash = dashboard();
        let (tx, rx) = mpsc::channel(4);
        tx.send(DashboardEvent::TrainClicked(ParameterForm::new("3", "10", "10000")))
            .await
            .unwrap();
        drop(tx);

        tokio::time::timeout(Duration::from_secs(2), dash.run(rx))
            .await
            .expect("event loop should stop");

        let surface = dash.surface();
        assert!(surface.trigger.enabled);
        assert_eq!(surface.trigger.label, "Start Simulation");
        assert_eq!(
            surface.last_alert(),
            Some("An error occurred during simulation.")
        );
        assert_eq!(dash.state().simulation.completed(), 1);
        assert!(dash.state().results.current().is_none());
    }

    #[tokio::test]
    async fn test_crashed_upload_marks_failed() {
        let mut dash = dashboard();
        let (tx, rx) = mpsc::channel(4);
        tx.send(DashboardEvent::FileSelected(FilePayload::new("abc.csv", b"x".to_vec())))
            .await
            .unwrap();
        drop(tx);

        tokio::time::timeout(Duration::from_secs(2), dash.run(rx))
            .await
            .expect("event loop should stop");

        assert_eq!(dash.surface().upload_status, "Upload Failed");
        assert!(dash.surface().alerts.is_empty());
        assert!(dash.state().upload.reference().is_none());
    }

    #[tokio::test]
    async fn test_loop_accepts_events_after_crash() {
        let mut dash = dashboard();
        let (tx, rx) = mpsc::channel(4);
        tx.send(DashboardEvent::TrainClicked(ParameterForm::new("3", "10", "10000")))
            .await
            .unwrap();
        drop(tx);
        tokio::time::timeout(Duration::from_secs(2), dash.run(rx))
            .await
            .unwrap();

        let (tx, rx) = mpsc::channel(4);
        tx.send(DashboardEvent::TrainClicked(ParameterForm::new("3", "10", "10000")))
            .await
            .unwrap();
        drop(tx);
        tokio::time::timeout(Duration::from_secs(2), dash.run(rx))
            .await
            .unwrap();

        assert_eq!(dash.state().simulation.completed(), 2);
        assert_eq!(dash.surface().alerts.len(), 2);
    }
}
