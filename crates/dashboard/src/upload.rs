//! Upload session.
//!
//! Uploads are not deduplicated and may complete in any order. Each one
//! carries a sequence number and only the most recently issued upload
//! may change the session; older completions are discarded.

use simdash_data::{BackendError, ErrorKind};
use simdash_domain::entities::UploadReference;
use tracing::{info, warn};

/// Status text shown next to the drop zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Nothing uploaded yet.
    #[default]
    Idle,
    /// An upload is in flight.
    Uploading,
    /// Last upload succeeded.
    Ready(String),
    /// Last upload failed.
    Failed,
}

impl UploadStatus {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Uploading => "Uploading...",
            Self::Ready(name) => name,
            Self::Failed => "Upload Failed",
        }
    }
}

/// Handle for one in-flight upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    seq: u64,
    file_name: String,
}

impl UploadTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// What a completed upload did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Reference stored.
    Accepted(UploadReference),
    /// Upload failed; the previous reference is kept.
    Failed { kind: ErrorKind, message: String },
    /// A newer upload was issued meanwhile; response ignored.
    Stale,
}

/// Tracks the dataset reference used by the next simulation.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    issued: u64,
    reference: Option<UploadReference>,
    status: UploadStatus,
}

impl UploadSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference from the last successful upload.
    #[must_use]
    pub fn reference(&self) -> Option<&UploadReference> {
        self.reference.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// Registers a new upload; it supersedes any upload still in flight.
    pub fn begin(&mut self, file_name: impl Into<String>) -> UploadTicket {
        self.issued += 1;
        self.status = UploadStatus::Uploading;
        let ticket = UploadTicket {
            seq: self.issued,
            file_name: file_name.into(),
        };
        info!(seq = ticket.seq, file = %ticket.file_name, "Upload started");
        ticket
    }

    /// Applies the response of an upload.
    pub fn complete(
        &mut self,
        ticket: UploadTicket,
        response: Result<UploadReference, BackendError>,
    ) -> UploadOutcome {
        if ticket.seq != self.issued {
            warn!(
                seq = ticket.seq,
                latest = self.issued,
                file = %ticket.file_name,
                "Discarding superseded upload response"
            );
            return UploadOutcome::Stale;
        }

        match response {
            Ok(reference) => {
                info!(
                    seq = ticket.seq,
                    filepath = %reference.path,
                    "Upload stored"
                );
                self.status = UploadStatus::Ready(reference.display_name.clone());
                self.reference = Some(reference.clone());
                UploadOutcome::Accepted(reference)
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "Upload failed");
                self.status = UploadStatus::Failed;
                UploadOutcome::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                }
            }
        }
    }
}
