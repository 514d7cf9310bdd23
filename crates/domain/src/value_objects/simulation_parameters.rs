//! Simulation parameters and the request body sent to the service.

use crate::entities::UploadReference;
use crate::error::DomainError;
use crate::value_objects::ParamValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Typed simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Training epochs.
    pub epochs: u32,
    /// Look-back window in days.
    pub window_size: u32,
    /// Starting cash.
    pub initial_balance: Decimal,
}

impl SimulationParameters {
    /// Creates parameters, requiring every value to be positive.
    ///
    /// # Errors
    /// Returns [`DomainError::NonPositiveParameter`] for the first value
    /// that is zero or negative.
    pub fn new(epochs: u32, window_size: u32, initial_balance: Decimal) -> Result<Self, DomainError> {
        if epochs == 0 {
            return Err(DomainError::NonPositiveParameter("epochs"));
        }
        if window_size == 0 {
            return Err(DomainError::NonPositiveParameter("window_size"));
        }
        if initial_balance <= Decimal::ZERO {
            return Err(DomainError::NonPositiveParameter("initial_balance"));
        }
        Ok(Self {
            epochs,
            window_size,
            initial_balance,
        })
    }

    /// Renders the parameters as control values.
    #[must_use]
    pub fn to_form(&self) -> ParameterForm {
        ParameterForm::new(
            self.epochs.to_string(),
            self.window_size.to_string(),
            self.initial_balance.normalize().to_string(),
        )
    }
}

/// Raw values of the three parameter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterForm {
    pub epochs: String,
    pub window_size: String,
    pub initial_balance: String,
}

impl ParameterForm {
    pub fn new(
        epochs: impl Into<String>,
        window_size: impl Into<String>,
        initial_balance: impl Into<String>,
    ) -> Self {
        Self {
            epochs: epochs.into(),
            window_size: window_size.into(),
            initial_balance: initial_balance.into(),
        }
    }

    /// Builds the request body from the current control values.
    ///
    /// Only presence is checked; non-numeric text is forwarded for the
    /// service to reject.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingParameter`] for the first blank field.
    pub fn to_request(
        &self,
        upload: Option<&UploadReference>,
    ) -> Result<SimulationRequest, DomainError> {
        let field = |raw: &str, name: &'static str| {
            ParamValue::parse(raw).ok_or(DomainError::MissingParameter(name))
        };

        Ok(SimulationRequest {
            filepath: upload.map(|u| u.path.clone()),
            epochs: field(&self.epochs, "epochs")?,
            window_size: field(&self.window_size, "window_size")?,
            initial_balance: field(&self.initial_balance, "initial_balance")?,
        })
    }
}

/// Body of a simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Uploaded dataset, or `null` to let the service pick its default.
    pub filepath: Option<String>,
    pub epochs: ParamValue,
    pub window_size: ParamValue,
    pub initial_balance: ParamValue,
}
