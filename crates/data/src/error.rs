//! Backend errors.

use simdash_domain::DomainError;

/// Coarse classification used to decide what the user is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The service could not be reached or answered unreadably.
    Transport,
    /// The service answered with an explicit error.
    Application,
}

/// Errors from the remote boundary.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Connection or protocol failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Error message reported by the service.
    #[error("{0}")]
    Remote(String),
    /// Body could not be decoded.
    #[error("invalid response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// The request task stopped before the service answered.
    #[error("request interrupted: {0}")]
    Interrupted(String),
    /// Result arrays do not line up.
    #[error("malformed result: {0}")]
    MalformedResult(#[from] DomainError),
}

impl BackendError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Decode { .. } | Self::Interrupted(_) => ErrorKind::Transport,
            Self::Remote(_) | Self::MalformedResult(_) => ErrorKind::Application,
        }
    }
}
