pub mod param_value;
pub mod simulation_parameters;

pub use param_value::ParamValue;
pub use simulation_parameters::{ParameterForm, SimulationParameters, SimulationRequest};
