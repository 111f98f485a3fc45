//! Consistency diagnostic - how far judgments are from perfectly transitive.

use serde::{Deserialize, Serialize};

/// Conventional "acceptably consistent" upper bound for CR.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Random index for matrix sizes 1..=10.
const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Below this, CI is treated as exactly zero.
const CI_EPSILON: f64 = 1e-9;

/// Random index RI(n); `None` outside the tabulated sizes.
pub fn random_index(n: usize) -> Option<f64> {
    n.checked_sub(1).and_then(|idx| RANDOM_INDEX.get(idx)).copied()
}

/// Dominant eigenvalue, consistency index and consistency ratio.
///
/// Informational only: nothing downstream is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyDiagnostic {
    pub lambda_max: f64,
    pub ci: f64,
    /// `None` when RI is not tabulated for this size or the ratio is undefined.
    pub cr: Option<f64>,
}

impl ConsistencyDiagnostic {
    /// Computes CI and CR for an `n`×`n` matrix with dominant eigenvalue `lambda_max`.
    ///
    /// # Edge Cases
    /// - n <= 1: CI = 0
    /// - RI(n) = 0 (n = 1, 2): CR = 0 when CI is zero, otherwise `None`
    /// - n > 10 or non-finite lambda: CR = `None`
    /// - Tiny negative CI from rounding is clamped to 0
    pub fn from_eigenvalue(lambda_max: f64, n: usize) -> Self {
        if !lambda_max.is_finite() {
            return Self {
                lambda_max,
                ci: f64::NAN,
                cr: None,
            };
        }

        let ci = if n > 1 {
            let n = n as f64;
            ((lambda_max - n) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };

        let cr = random_index(n).and_then(|ri| {
            if ri > 0.0 {
                Some(ci / ri)
            } else if ci < CI_EPSILON {
                Some(0.0)
            } else {
                None
            }
        });

        Self { lambda_max, ci, cr }
    }

    /// Diagnostic for a matrix whose eigenvalue could not be determined.
    pub fn undetermined(n: usize) -> Self {
        Self {
            lambda_max: n as f64,
            ci: 0.0,
            cr: None,
        }
    }

    /// True when CR is known and at or below `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.cr.map(|cr| cr <= threshold).unwrap_or(false)
    }
}
