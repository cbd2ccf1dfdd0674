//! File-based Registry Store Adapter
//!
//! Stores one registry as a YAML sequence in a single file. Writes go to a
//! sibling temp file which is then renamed over the target, so a crash
//! mid-write leaves the previous contents in place.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{RegistryStore, StoreError};

/// File-based storage for one registry
#[derive(Debug, Clone)]
pub struct FileRegistryStore<T> {
    path: PathBuf,
    name: String,
    _rows: PhantomData<fn() -> T>,
}

impl<T> FileRegistryStore<T> {
    /// Create a store backed by `path`
    ///
    /// # Example
    /// ```ignore
    /// let fallen: FileRegistryStore<String> = FileRegistryStore::new("./data/fallen.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            _rows: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temp file used for atomic replacement
    fn temp_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    /// Ensure the parent directory exists
    async fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl<T> RegistryStore<T> for FileRegistryStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.display().to_string()));
        }

        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml).map_err(|e| StoreError::DeserializationFailed(e.to_string()))
    }

    async fn replace_all(&self, rows: &[T]) -> Result<(), StoreError> {
        self.ensure_parent().await?;

        let yaml = serde_yaml::to_string(rows)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, yaml)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
