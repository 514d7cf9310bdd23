pub mod simulation_result;
pub mod upload;

pub use simulation_result::{IndicatorSeries, OhlcSeries, SimulationMetrics, SimulationResult};
pub use upload::{FilePayload, UploadReference};
