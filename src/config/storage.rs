//! Submission storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where submissions are persisted
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding one JSON document per submission
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.submissions_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.submissions_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            submissions_dir: default_submissions_dir(),
        }
    }
}

fn default_submissions_dir() -> PathBuf {
    PathBuf::from("data/submissions")
}
