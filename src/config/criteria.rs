//! Criteria configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{CriteriaSet, Criterion};

/// Ordered list of ranking criteria
///
/// Deserializes from a plain list of `{label, column}` tables. When absent,
/// the six reference criteria are used.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CriteriaConfig {
    pub criteria: Vec<Criterion>,
}

impl CriteriaConfig {
    /// Build the validated criteria set used by the ranking pipeline
    pub fn criteria_set(&self) -> Result<CriteriaSet, ValidationError> {
        CriteriaSet::new(self.criteria.clone())
            .map_err(|e| ValidationError::InvalidCriteria(e.to_string()))
    }

    /// Validate criteria configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::NoCriteria);
        }
        self.criteria_set().map(|_| ())
    }
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            criteria: CriteriaSet::reference().criteria().to_vec(),
        }
    }
}
