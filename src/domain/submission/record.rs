//! Submission record handed to the persistence sink.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::ConsistencyDiagnostic;
use crate::domain::foundation::{SubmissionId, Timestamp};
use crate::domain::scoring::{RankedSite, WeightVector};

/// How the weights of a submission were obtained.
///
/// Reads both `"ahp"` and the upper-case `"AHP"` the web client sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMethod {
    /// Pairwise judgments through the Analytic Hierarchy Process.
    #[default]
    #[serde(alias = "AHP")]
    Ahp,
    /// Direct linear weighting (weighted sum model).
    #[serde(alias = "WSM")]
    Wsm,
}

impl RankingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            RankingMethod::Ahp => "AHP",
            RankingMethod::Wsm => "WSM",
        }
    }
}

/// Free-form, optional details about who submitted a ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterInfo {
    pub name: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub feedback: Option<String>,
}

impl SubmitterInfo {
    /// Trims every field and drops the ones left empty.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: clean(self.name),
            occupation: clean(self.occupation),
            location: clean(self.location),
            feedback: clean(self.feedback),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

/// A saved ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub created_at: Timestamp,
    pub method: RankingMethod,
    pub submitter: SubmitterInfo,
    pub weights: WeightVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ConsistencyDiagnostic>,
    pub top_sites: Vec<RankedSite>,
}

impl Submission {
    /// Creates a submission with a fresh id and the current time.
    pub fn new(
        method: RankingMethod,
        submitter: SubmitterInfo,
        weights: WeightVector,
        consistency: Option<ConsistencyDiagnostic>,
        top_sites: Vec<RankedSite>,
    ) -> Self {
        Self {
            id: SubmissionId::new(),
            created_at: Timestamp::now(),
            method,
            submitter: submitter.normalized(),
            weights,
            consistency,
            top_sites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitter_info_is_trimmed() {
        let info = SubmitterInfo {
            name: Some("  Ada  ".to_string()),
            occupation: Some("   ".to_string()),
            location: None,
            feedback: Some("near transit\n".to_string()),
        }
        .normalized();

        assert_eq!(info.name.as_deref(), Some("Ada"));
        assert_eq!(info.occupation, None);
        assert_eq!(info.feedback.as_deref(), Some("near transit"));
        assert!(!info.is_anonymous());
    }

    #[test]
    fn new_submission_normalizes_submitter() {
        let s = Submission::new(
            RankingMethod::Wsm,
            SubmitterInfo {
                name: Some(" ".to_string()),
                ..Default::default()
            },
            WeightVector::default(),
            None,
            vec![],
        );
        assert!(s.submitter.is_anonymous());
        assert_eq!(s.method.label(), "WSM");
    }

    #[test]
    fn method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RankingMethod::Ahp).unwrap(), "\"ahp\"");
    }

    #[test]
    fn method_reads_upper_case_and_defaults_to_ahp() {
        let wsm: RankingMethod = serde_json::from_str("\"WSM\"").unwrap();
        let ahp: RankingMethod = serde_json::from_str("\"AHP\"").unwrap();
        assert_eq!(wsm, RankingMethod::Wsm);
        assert_eq!(ahp, RankingMethod::Ahp);
        assert_eq!(RankingMethod::default(), RankingMethod::Ahp);
    }

    #[test]
    fn submission_roundtrips_through_json() {
        let s = Submission::new(
            RankingMethod::Ahp,
            SubmitterInfo::default(),
            serde_json::from_str(r#"{"transit_dist":0.6,"general_plan_dist":0.4}"#).unwrap(),
            Some(ConsistencyDiagnostic::from_eigenvalue(2.0, 2)),
            vec![RankedSite {
                lat: 37.8,
                lon: -122.27,
                rank: 1,
                final_score: 0.0,
            }],
        );

        let json = serde_json::to_string(&s).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
