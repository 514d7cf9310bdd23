//! Application state owned by the dashboard controller.

use crate::result_store::ResultStore;
use crate::simulation::SimulationRequestController;
use crate::upload::UploadSession;
use simdash_domain::view_state::ViewState;

/// Everything the dashboard mutates, in one place.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub upload: UploadSession,
    pub simulation: SimulationRequestController,
    pub results: ResultStore,
    pub view: ViewState,
    /// Drop zone currently highlighted by a drag.
    pub drop_highlight: bool,
}
