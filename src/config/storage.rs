//! Registry storage configuration

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the registry files live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding every registry file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_fallen_file")]
    pub fallen_file: String,

    #[serde(default = "default_holdover_file")]
    pub holdover_file: String,

    #[serde(default = "default_winners_file")]
    pub winners_file: String,

    #[serde(default = "default_boundary_file")]
    pub boundary_file: String,
}

impl StorageConfig {
    pub fn fallen_path(&self) -> PathBuf {
        self.data_dir.join(&self.fallen_file)
    }

    pub fn holdover_path(&self) -> PathBuf {
        self.data_dir.join(&self.holdover_file)
    }

    pub fn winners_path(&self) -> PathBuf {
        self.data_dir.join(&self.winners_file)
    }

    pub fn boundary_path(&self) -> PathBuf {
        self.data_dir.join(&self.boundary_file)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let files = [
            &self.fallen_file,
            &self.holdover_file,
            &self.winners_file,
            &self.boundary_file,
        ];
        if files.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::InvalidStorageFiles);
        }
        let distinct: HashSet<_> = files.iter().collect();
        if distinct.len() != files.len() {
            return Err(ValidationError::InvalidStorageFiles);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            fallen_file: default_fallen_file(),
            holdover_file: default_holdover_file(),
            winners_file: default_winners_file(),
            boundary_file: default_boundary_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_fallen_file() -> String {
    "fallen.yaml".to_string()
}

fn default_holdover_file() -> String {
    "holdover.yaml".to_string()
}

fn default_winners_file() -> String {
    "winners.yaml".to_string()
}

fn default_boundary_file() -> String {
    "rollover-time.yaml".to_string()
}
