//! Access to the remote simulation service.
//!
//! This crate provides the client side of the two remote boundaries:
//! - Dataset upload, answered with a server-side reference path
//! - Simulation runs, answered with a full result or an error
//!
//! The [`SimulationBackend`] trait is the seam the dashboard depends
//! on; [`HttpBackend`] implements it over HTTP.

mod backend;
mod config;
mod error;
mod http;
mod wire;

pub use backend::SimulationBackend;
pub use config::BackendConfig;
pub use error::{BackendError, ErrorKind};
pub use http::HttpBackend;
pub use wire::Envelope;
