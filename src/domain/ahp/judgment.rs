//! Judgment scale - the closed 5-point vocabulary of pairwise comparisons.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-supplied judgments: judgment key -> raw label string.
///
/// Keys look like `"<label_i>__vs__<label_j>"` with `i` before `j` in the
/// criteria order. Unknown keys are ignored and missing keys mean "equal".
pub type JudgmentSet = HashMap<String, String>;

/// Label meaning "both criteria matter the same".
pub const EQUAL_LABEL: &str = "Equal";

/// Qualitative comparison of the first criterion of a pair against the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentLabel {
    FirstMuchMore,
    FirstMore,
    #[default]
    Equal,
    SecondMore,
    SecondMuchMore,
}

impl JudgmentLabel {
    /// All labels, strongest preference for the first criterion first.
    pub const ALL: [JudgmentLabel; 5] = [
        JudgmentLabel::FirstMuchMore,
        JudgmentLabel::FirstMore,
        JudgmentLabel::Equal,
        JudgmentLabel::SecondMore,
        JudgmentLabel::SecondMuchMore,
    ];

    /// Numeric strength placed at `M[i][j]`.
    pub fn strength(&self) -> f64 {
        match self {
            JudgmentLabel::FirstMuchMore => 5.0,
            JudgmentLabel::FirstMore => 3.0,
            JudgmentLabel::Equal => 1.0,
            JudgmentLabel::SecondMore => 1.0 / 3.0,
            JudgmentLabel::SecondMuchMore => 1.0 / 5.0,
        }
    }

    /// Reads a raw label such as `"Transit Access much more"` for the pair
    /// `(first, second)`.
    ///
    /// Anything unrecognized is read as `Equal`.
    pub fn parse(raw: &str, first: &str, second: &str) -> Self {
        Self::try_parse(raw, first, second).unwrap_or(JudgmentLabel::Equal)
    }

    /// Strict variant of [`JudgmentLabel::parse`]; `None` for unrecognized labels.
    pub fn try_parse(raw: &str, first: &str, second: &str) -> Option<Self> {
        if raw == EQUAL_LABEL {
            return Some(JudgmentLabel::Equal);
        }
        Self::ALL
            .into_iter()
            .filter(|label| *label != JudgmentLabel::Equal)
            .find(|label| label.render(first, second) == raw)
    }

    /// The wire form of this label for the pair `(first, second)`.
    pub fn render(&self, first: &str, second: &str) -> String {
        match self {
            JudgmentLabel::FirstMuchMore => format!("{} much more", first),
            JudgmentLabel::FirstMore => format!("{} more", first),
            JudgmentLabel::Equal => EQUAL_LABEL.to_string(),
            JudgmentLabel::SecondMore => format!("{} more", second),
            JudgmentLabel::SecondMuchMore => format!("{} much more", second),
        }
    }
}
