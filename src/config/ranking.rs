//! Ranking configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::DEFAULT_CONSISTENCY_THRESHOLD;
use crate::domain::scoring::DEFAULT_TOP_N;

/// Largest number of decimals weights may be rounded to
const MAX_WEIGHT_DECIMALS: u32 = 10;

/// Ranking output configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RankingConfig {
    /// Maximum number of ranked sites returned
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Decimals used when reporting weights
    #[serde(default = "default_weight_decimals")]
    pub weight_decimals: u32,

    /// Consistency ratio above which a warning is logged
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        if self.weight_decimals > MAX_WEIGHT_DECIMALS {
            return Err(ValidationError::WeightDecimalsTooLarge);
        }
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            weight_decimals: default_weight_decimals(),
            consistency_threshold: default_consistency_threshold(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_weight_decimals() -> u32 {
    4
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}
