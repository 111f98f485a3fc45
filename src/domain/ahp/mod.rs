//! AHP Module - Pairwise judgments to criterion weights.
//!
//! The Analytic Hierarchy Process turns sparse qualitative comparisons
//! ("Transit Access more") into a numeric weight per criterion.
//!
//! # Components
//!
//! - `CriteriaSet` - Ordered, immutable list of criteria and their data columns
//! - `JudgmentLabel` - The closed 5-point comparison scale
//! - `PairwiseResolver` - Judgments to reciprocal `ComparisonMatrix`
//! - `WeightExtractor` - Principal eigenvector weights plus `ConsistencyDiagnostic`
//!
//! All functions are pure and stateless; a request builds its own matrix
//! and throws it away.

mod comparison_matrix;
mod consistency;
mod criteria;
mod judgment;
mod weight_extractor;

pub use comparison_matrix::{ComparisonMatrix, PairwiseResolver};
pub use consistency::{random_index, ConsistencyDiagnostic, DEFAULT_CONSISTENCY_THRESHOLD};
pub use criteria::{CriteriaSet, Criterion, JUDGMENT_KEY_SEPARATOR};
pub use judgment::{JudgmentLabel, JudgmentSet};
pub use weight_extractor::{AhpWeights, WeightExtractor};
