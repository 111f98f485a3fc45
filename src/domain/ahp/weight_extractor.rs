//! AHP Weight Extractor - principal eigenvector weights and consistency.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, ConsistencyDiagnostic};

/// Weights in criterion order plus the consistency diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpWeights {
    /// Non-negative, sums to 1 (empty for an empty matrix).
    pub weights: Vec<f64>,
    pub consistency: ConsistencyDiagnostic,
}

/// Extracts AHP weights from comparison matrices.
pub struct WeightExtractor;

impl WeightExtractor {
    /// Computes the principal eigenvector weights of `matrix`.
    ///
    /// The matrix is not symmetric, so the eigenvalues come from a general
    /// complex solver; the one with the largest real part is the Perron root.
    /// Its eigenvector is recovered as the null space of `M - λI` and taken
    /// component-wise in absolute value, since eigenvector sign is arbitrary.
    ///
    /// # Edge Cases
    /// - N = 0: empty weights, CR `None`
    /// - N = 1: `[1.0]`, CI = 0
    /// - Degenerate eigen results: uniform weights, CR `None`
    pub fn extract(matrix: &ComparisonMatrix) -> AhpWeights {
        let n = matrix.size();
        match n {
            0 => {
                return AhpWeights {
                    weights: Vec::new(),
                    consistency: ConsistencyDiagnostic::undetermined(0),
                }
            }
            1 => {
                return AhpWeights {
                    weights: vec![1.0],
                    consistency: ConsistencyDiagnostic::from_eigenvalue(1.0, 1),
                }
            }
            _ => {}
        }

        let m = matrix.as_matrix();
        let Some(lambda_max) = dominant_eigenvalue(m) else {
            return Self::uniform(n);
        };

        match principal_eigenvector(m, lambda_max) {
            Some(weights) => AhpWeights {
                weights,
                consistency: ConsistencyDiagnostic::from_eigenvalue(lambda_max, n),
            },
            None => Self::uniform(n),
        }
    }

    fn uniform(n: usize) -> AhpWeights {
        AhpWeights {
            weights: vec![1.0 / n as f64; n],
            consistency: ConsistencyDiagnostic::undetermined(n),
        }
    }
}

/// Real part of the eigenvalue with the largest real part.
fn dominant_eigenvalue(m: &DMatrix<f64>) -> Option<f64> {
    m.complex_eigenvalues()
        .iter()
        .map(|lambda| lambda.re)
        .filter(|re| re.is_finite())
        .max_by(|a, b| a.total_cmp(b))
        .filter(|re| *re > 0.0)
}

/// Unit-sum, non-negative eigenvector for `lambda`.
fn principal_eigenvector(m: &DMatrix<f64>, lambda: f64) -> Option<Vec<f64>> {
    let n = m.nrows();
    let shifted = m - DMatrix::<f64>::identity(n, n) * lambda;
    let svd = shifted.svd(false, true);
    let v_t = svd.v_t?;

    // right singular vector of the smallest singular value spans the null space
    let (idx, _) = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))?;

    let magnitudes: Vec<f64> = v_t.row(idx).iter().map(|x| x.abs()).collect();
    let total: f64 = magnitudes.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    Some(magnitudes.into_iter().map(|x| x / total).collect())
}
