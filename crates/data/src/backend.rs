use crate::error::BackendError;
use async_trait::async_trait;
use simdash_domain::entities::{FilePayload, SimulationResult, UploadReference};
use simdash_domain::value_objects::SimulationRequest;

/// Remote store and simulation engine.
#[async_trait]
pub trait SimulationBackend: Send + Sync {
    /// Sends a dataset and returns the server-side reference to it.
    async fn upload(&self, file: FilePayload) -> Result<UploadReference, BackendError>;

    /// Runs a simulation and returns its complete result.
    async fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, BackendError>;
}
