//! Interactive dashboard controller.
//!
//! This crate wires the pure presentation logic to user actions and the
//! remote service:
//! - Upload session with stale-response protection
//! - Simulation request lifecycle and busy trigger
//! - Single-slot result store
//! - Chart mode and overlay toggles
//! - One reconciliation step that recomposes and re-renders the chart
//! - An event loop that processes user events and network completions
//!   one at a time

/// Prelude module for convenient imports.
pub mod prelude;

/// The dashboard controller.
pub mod dashboard;
/// Error types.
pub mod error;
/// Event loop.
pub mod events;
/// Renderers.
pub mod render;
/// Result store.
pub mod result_store;
/// Simulation request lifecycle.
pub mod simulation;
/// Application state.
pub mod state;
/// Status surface.
pub mod surface;
/// Upload session.
pub mod upload;

pub use dashboard::{DEFAULT_TARGET, Dashboard, RunOutcome};
pub use error::DashboardError;
pub use events::DashboardEvent;
pub use render::{HtmlRenderer, MemoryRenderer, RenderError, Renderer};
pub use state::AppState;
pub use surface::{MemorySurface, StatusSurface, TriggerState};
