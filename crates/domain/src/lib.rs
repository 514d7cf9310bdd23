//! Domain model for the simulation dashboard.
//!
//! This crate holds the data the dashboard works with:
//! - Simulation results as returned by the remote service
//! - Upload references and file payloads
//! - Simulation parameters and the request body built from them
//! - The user-controlled view state (chart mode and overlays)

/// Domain entities.
pub mod entities;
/// Enumerations shared across crates.
pub mod enums;
/// Error types.
pub mod error;
/// Value objects.
pub mod value_objects;
/// View state mutated by the chart controls.
pub mod view_state;

pub use error::DomainError;
pub use view_state::{OverlayFlags, ViewState};
