//! Simulation request lifecycle.

use crate::error::DashboardError;
use crate::surface::TriggerState;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Handle for the simulation in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    run_id: Uuid,
    started_at: Instant,
}

impl RunTicket {
    #[must_use]
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }
}

/// Guards the simulation trigger.
///
/// At most one run is in flight. The trigger is disabled from
/// [`begin`](Self::begin) until [`finish`](Self::finish), which always
/// re-enables it whatever the outcome.
#[derive(Debug, Clone, Default)]
pub struct SimulationRequestController {
    in_flight: Option<Uuid>,
    completed: u64,
}

impl SimulationRequestController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of runs finished so far, successful or not.
    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Trigger state matching the lifecycle.
    #[must_use]
    pub fn trigger(&self) -> TriggerState {
        if self.is_busy() {
            TriggerState::busy()
        } else {
            TriggerState::idle()
        }
    }

    /// Starts a run.
    ///
    /// # Errors
    /// Returns [`DashboardError::Busy`] while another run is in flight.
    pub fn begin(&mut self) -> Result<RunTicket, DashboardError> {
        if let Some(current) = self.in_flight {
            warn!(run_id = %current, "Simulation already in flight");
            return Err(DashboardError::Busy);
        }
        let ticket = RunTicket {
            run_id: Uuid::new_v4(),
            started_at: Instant::now(),
        };
        self.in_flight = Some(ticket.run_id);
        info!(run_id = %ticket.run_id, "Simulation started");
        Ok(ticket)
    }

    /// Ends a run and releases the trigger.
    pub fn finish(&mut self, ticket: &RunTicket) -> Duration {
        let elapsed = ticket.started_at.elapsed();
        if self.in_flight != Some(ticket.run_id) {
            warn!(run_id = %ticket.run_id, "Finishing a run that was not in flight");
        }
        self.in_flight = None;
        self.completed += 1;
        info!(
            run_id = %ticket.run_id,
            elapsed_ms = elapsed.as_millis() as u64,
            "Simulation finished"
        );
        elapsed
    }
}
