//! Criteria - the fixed, ordered list of things a user compares.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// Separator between the two criterion labels of a judgment key.
pub const JUDGMENT_KEY_SEPARATOR: &str = "__vs__";

/// A single ranking criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Display label, also used inside judgment keys.
    pub label: String,
    /// Column of the site table holding this criterion's raw values.
    pub column: String,
}

impl Criterion {
    pub fn new(label: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column: column.into(),
        }
    }
}

/// Ordered, validated set of criteria.
///
/// The order is the matrix order: row `i` of every comparison matrix and
/// entry `i` of every weight vector belong to `criteria()[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Builds a criteria set, rejecting blank or duplicated labels/columns.
    ///
    /// An empty set is allowed; it yields empty weights and scores.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ValidationError> {
        let mut labels = HashSet::new();
        let mut columns = HashSet::new();

        for criterion in &criteria {
            if criterion.label.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion.label"));
            }
            if criterion.column.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion.column"));
            }
            if criterion.label.contains(JUDGMENT_KEY_SEPARATOR) {
                return Err(ValidationError::invalid_format(
                    "criterion.label",
                    format!("'{}' contains '{}'", criterion.label, JUDGMENT_KEY_SEPARATOR),
                ));
            }
            if !labels.insert(criterion.label.as_str()) {
                return Err(ValidationError::duplicate("criterion.label", &criterion.label));
            }
            if !columns.insert(criterion.column.as_str()) {
                return Err(ValidationError::duplicate("criterion.column", &criterion.column));
            }
        }

        Ok(Self { criteria })
    }

    /// The six criteria of the reference deployment.
    pub fn reference() -> Self {
        Self {
            criteria: vec![
                Criterion::new("Transit Access", "transit_dist"),
                Criterion::new("Homeless Services Nearby", "homeless_service_dist"),
                Criterion::new("Affordable Housing Nearby", "public_housing_dist"),
                Criterion::new("Access to Water Infrastructure", "water_infrastructure_dist"),
                Criterion::new("Nearby City Facilities", "city_facility_dist"),
                Criterion::new("Urban Plan Priority Area", "general_plan_dist"),
            ],
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Data columns in criterion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|c| c.column.as_str())
    }

    /// Judgment key for the pair `(i, j)`, e.g. `"Transit Access__vs__Nearby City Facilities"`.
    ///
    /// Returns `None` unless `i < j < len`.
    pub fn judgment_key(&self, i: usize, j: usize) -> Option<String> {
        if i >= j || j >= self.criteria.len() {
            return None;
        }
        Some(format!(
            "{}{}{}",
            self.criteria[i].label, JUDGMENT_KEY_SEPARATOR, self.criteria[j].label
        ))
    }
}

impl Default for CriteriaSet {
    fn default() -> Self {
        Self::reference()
    }
}
