//! Storage directory handle and document reader.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Configuration for the `.storage` adapter.
pub struct Config {
    /// Path of the Home Assistant `.storage` directory.
    pub path: PathBuf,
}

impl Config {
    /// Build a [`HassStorage`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::MissingDirectory`] when `path` is not a
    /// directory, or an IO error if it cannot be inspected.
    pub async fn build(self) -> Result<HassStorage, StorageError> {
        let is_dir = tokio::fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_dir())
            .or_else(|err| match err.kind() {
                std::io::ErrorKind::NotFound => Ok(false),
                _ => Err(err),
            })?;
        if !is_dir {
            return Err(StorageError::MissingDirectory(self.path));
        }
        Ok(HassStorage { root: self.path })
    }
}

/// Read-only view over a Home Assistant `.storage` directory.
#[derive(Debug, Clone)]
pub struct HassStorage {
    root: PathBuf,
}

/// Envelope shared by every storage document.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

impl HassStorage {
    /// Borrow the storage directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the `data` payload of the storage document named `key`.
    ///
    /// Returns `Ok(None)` when no such document exists.
    pub(crate) async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.root.join(key);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "storage document not found");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let envelope: Envelope<T> = serde_json::from_str(&content)?;
        Ok(Some(envelope.data))
    }
}
