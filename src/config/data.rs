//! Dataset location configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the binary reads its dataset from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON or YAML dataset file
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.dataset_path"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/sample_dataset.json")
}
