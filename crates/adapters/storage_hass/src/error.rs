//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use homecontrol_domain::error::HomeControlError;

/// Errors originating from the `.storage` directory.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The configured storage directory does not exist.
    #[error("storage directory not found: {0}")]
    MissingDirectory(PathBuf),

    /// Reading a storage file failed.
    #[error("failed to read storage file")]
    Io(#[from] std::io::Error),

    /// A storage file is not the JSON document we expect.
    #[error("malformed storage file")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for HomeControlError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
