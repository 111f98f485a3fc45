//! Weight vector keyed by data column.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::domain::ahp::CriteriaSet;

/// Ordered `(column, weight)` pairs.
///
/// Serializes as a JSON object in criterion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightVector {
    entries: Vec<(String, f64)>,
}

impl WeightVector {
    /// Re-keys weights given in criterion order to their data columns.
    ///
    /// Missing trailing weights are 0; extra weights are dropped.
    pub fn from_criteria(criteria: &CriteriaSet, weights: &[f64]) -> Self {
        let entries = criteria
            .columns()
            .enumerate()
            .map(|(i, column)| (column.to_string(), weights.get(i).copied().unwrap_or(0.0)))
            .collect();
        Self { entries }
    }

    /// Builds a vector over `criteria` from direct, column-keyed weights.
    ///
    /// Columns outside `criteria` are ignored. Missing, negative, and
    /// non-finite weights become 0.
    pub fn from_direct(criteria: &CriteriaSet, direct: &HashMap<String, f64>) -> Self {
        let entries = criteria
            .columns()
            .map(|column| {
                let weight = direct
                    .get(column)
                    .copied()
                    .filter(|w| w.is_finite() && *w > 0.0)
                    .unwrap_or(0.0);
                (column.to_string(), weight)
            })
            .collect();
        Self { entries }
    }

    /// Weight for `column`, 0 when absent.
    pub fn get(&self, column: &str) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, w)| (c.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Scales weights to sum to exactly 1.
    ///
    /// A vector with a non-positive or non-finite total becomes all zeros,
    /// so every site scores 0.
    pub fn renormalized(&self) -> Self {
        let total = self.sum();
        let usable = total.is_finite() && total > 0.0;
        let entries = self
            .entries
            .iter()
            .map(|(c, w)| (c.clone(), if usable { w / total } else { 0.0 }))
            .collect();
        Self { entries }
    }

    /// Copy with every weight rounded to `decimals` places, for display.
    pub fn rounded(&self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        let entries = self
            .entries
            .iter()
            .map(|(c, w)| (c.clone(), (w * factor).round() / factor))
            .collect();
        Self { entries }
    }
}

impl Serialize for WeightVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, weight) in &self.entries {
            map.serialize_entry(column, weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeightVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeightVectorVisitor;

        impl<'de> Visitor<'de> for WeightVectorVisitor {
            type Value = WeightVector;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of column name to weight")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((column, weight)) = access.next_entry::<String, f64>()? {
                    entries.push((column, weight));
                }
                Ok(WeightVector { entries })
            }
        }

        deserializer.deserialize_map(WeightVectorVisitor)
    }
}
