//! Site data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where candidate sites are read from
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    /// GeoJSON FeatureCollection of candidate sites
    #[serde(default = "default_sites_path")]
    pub sites_path: PathBuf,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sites_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.sites_path"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sites_path: default_sites_path(),
        }
    }
}

fn default_sites_path() -> PathBuf {
    PathBuf::from("candidates_with_features.geojson")
}
