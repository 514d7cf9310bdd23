use serde::{Deserialize, Serialize};

/// Server-side handle to an uploaded dataset.
///
/// The path is opaque and sent back verbatim with the next simulation
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReference {
    /// Opaque server path.
    #[serde(rename = "filepath")]
    pub path: String,
    /// Name shown to the user.
    #[serde(rename = "filename")]
    pub display_name: String,
}

impl UploadReference {
    pub fn new(path: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
        }
    }
}

/// A file picked or dropped by the user, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// Original file name.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Size of the payload in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
