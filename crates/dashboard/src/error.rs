//! Dashboard errors.

use crate::render::RenderError;

/// Errors raised by the dashboard components.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A simulation is already in flight.
    #[error("a simulation is already running")]
    Busy,
    /// The renderer failed.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
