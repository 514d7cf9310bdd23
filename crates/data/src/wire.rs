//! Response envelopes.

use crate::error::BackendError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Either an explicit error or a success body.
///
/// The service uses the same shape for every status code, so the body
/// is inspected before the status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Failure { error: String },
    Success(T),
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, BackendError> {
        match self {
            Self::Failure { error } => Err(BackendError::Remote(error)),
            Self::Success(body) => Ok(body),
        }
    }
}

/// Decodes a response body into its payload.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map_err(|source| BackendError::Decode { status, source })?
        .into_result()
}
