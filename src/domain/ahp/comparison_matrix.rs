//! Pairwise Judgment Resolver - sparse judgments to a reciprocal matrix.

use nalgebra::DMatrix;

use super::{CriteriaSet, JudgmentLabel, JudgmentSet};

/// Positive reciprocal pairwise comparison matrix with unit diagonal.
///
/// Only [`PairwiseResolver`] builds one, so every instance satisfies
/// `M[j][i] == 1 / M[i][j]` and `M[i][i] == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix(DMatrix<f64>);

impl ComparisonMatrix {
    /// Number of criteria (rows == columns).
    pub fn size(&self) -> usize {
        self.0.nrows()
    }

    /// Entry `M[i][j]`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get((i, j)).copied()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    /// Row-major copy, handy for reporting.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.0
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Builds comparison matrices from judgment sets.
pub struct PairwiseResolver;

impl PairwiseResolver {
    /// Resolves the judgments over `criteria` into an N×N reciprocal matrix.
    ///
    /// # Edge Cases
    /// - Missing key: treated as `Equal`
    /// - Unrecognized label: treated as `Equal`
    /// - Keys that match no pair: ignored
    /// - N = 1: `[1]`; N = 0: empty matrix
    pub fn resolve(criteria: &CriteriaSet, judgments: &JudgmentSet) -> ComparisonMatrix {
        let n = criteria.len();
        let mut matrix = DMatrix::<f64>::identity(n, n);

        for i in 0..n {
            for j in (i + 1)..n {
                let label = criteria
                    .judgment_key(i, j)
                    .and_then(|key| judgments.get(&key))
                    .map(|raw| {
                        JudgmentLabel::parse(
                            raw,
                            &criteria.criteria()[i].label,
                            &criteria.criteria()[j].label,
                        )
                    })
                    .unwrap_or_default();

                let strength = label.strength();
                matrix[(i, j)] = strength;
                matrix[(j, i)] = 1.0 / strength;
            }
        }

        ComparisonMatrix(matrix)
    }

    /// Lists judgment values that will be read as `Equal` because they
    /// match none of the five labels for their pair.
    pub fn unrecognized_labels<'a>(
        criteria: &CriteriaSet,
        judgments: &'a JudgmentSet,
    ) -> Vec<(&'a str, &'a str)> {
        let n = criteria.len();
        let mut out = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let Some(key) = criteria.judgment_key(i, j) else {
                    continue;
                };
                if let Some((k, raw)) = judgments.get_key_value(&key) {
                    let first = &criteria.criteria()[i].label;
                    let second = &criteria.criteria()[j].label;
                    if JudgmentLabel::try_parse(raw, first, second).is_none() {
                        out.push((k.as_str(), raw.as_str()));
                    }
                }
            }
        }
        out
    }
}
