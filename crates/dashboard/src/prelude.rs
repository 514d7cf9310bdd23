//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use simdash_dashboard::prelude::*;
//! ```

// Controller
pub use crate::dashboard::{Dashboard, RunOutcome};
pub use crate::events::DashboardEvent;
pub use crate::state::AppState;

// Components
pub use crate::result_store::ResultStore;
pub use crate::simulation::{RunTicket, SimulationRequestController};
pub use crate::upload::{UploadOutcome, UploadSession, UploadStatus, UploadTicket};

// Collaborators
pub use crate::render::{HtmlRenderer, MemoryRenderer, RenderError, RenderedFrame, Renderer};
pub use crate::surface::{MemorySurface, StatusSurface, TriggerState};

// Errors
pub use crate::error::DashboardError;
