//! SaveSubmissionHandler - Command handler for persisting a ranking.
//!
//! Saving is independent of scoring: the ranking has already been shown
//! to the user, and a storage failure is reported without touching it.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::ahp::ConsistencyDiagnostic;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::scoring::{RankedSite, WeightVector};
use crate::domain::submission::{RankingMethod, Submission, SubmitterInfo};
use crate::ports::{SubmissionRepository, SubmissionStoreError};

/// Command to save a ranking with optional submitter details.
///
/// Submitter fields sit at the top level of the JSON document, next to
/// `method`, `weights`, and `top_sites`. A document without `method` is an
/// AHP map.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSubmissionCommand {
    #[serde(default)]
    pub method: RankingMethod,
    #[serde(flatten)]
    pub submitter: SubmitterInfo,
    pub weights: WeightVector,
    #[serde(default)]
    pub consistency: Option<ConsistencyDiagnostic>,
    #[serde(default)]
    pub top_sites: Vec<RankedSite>,
}

impl SaveSubmissionCommand {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.weights.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        if let Some((column, _)) = self.weights.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(ValidationError::invalid_format(
                "weights",
                format!("weight for '{column}' must be a non-negative number"),
            ));
        }
        if self.top_sites.iter().any(|site| site.rank == 0) {
            return Err(ValidationError::invalid_format(
                "top_sites",
                "ranks start at 1",
            ));
        }
        Ok(())
    }
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveSubmissionResult {
    pub submission: Submission,
}

/// Errors that can occur while saving a submission.
#[derive(Debug, thiserror::Error)]
pub enum SaveSubmissionError {
    #[error("Invalid submission: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to store submission: {0}")]
    Storage(#[from] SubmissionStoreError),
}

impl From<SaveSubmissionError> for DomainError {
    fn from(err: SaveSubmissionError) -> Self {
        match err {
            SaveSubmissionError::Invalid(e) => e.into(),
            SaveSubmissionError::Storage(e) => e.into(),
        }
    }
}

/// Handler for saving submissions.
pub struct SaveSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl SaveSubmissionHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SaveSubmissionCommand,
    ) -> Result<SaveSubmissionResult, SaveSubmissionError> {
        // 1. Validate
        cmd.validate()?;

        // 2. Build record
        let consistency = match cmd.method {
            RankingMethod::Ahp => cmd.consistency,
            RankingMethod::Wsm => None,
        };
        let submission = Submission::new(
            cmd.method,
            cmd.submitter,
            cmd.weights,
            consistency,
            cmd.top_sites,
        );

        // 3. Persist
        if let Err(e) = self.repository.save(&submission).await {
            warn!(submission_id = %submission.id, error = %e, "Failed to save submission");
            return Err(e.into());
        }

        info!(
            submission_id = %submission.id,
            method = submission.method.label(),
            anonymous = submission.submitter.is_anonymous(),
            sites = submission.top_sites.len(),
            "Submission saved"
        );

        Ok(SaveSubmissionResult { submission })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{CriteriaSet, Criterion};
    use crate::domain::foundation::{ErrorCode, SubmissionId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSubmissionRepository {
        saved: Mutex<Vec<Submission>>,
        fail_save: bool,
    }

    impl MockSubmissionRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved(&self) -> Vec<Submission> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionRepository for MockSubmissionRepository {
        async fn save(&self, submission: &Submission) -> Result<(), SubmissionStoreError> {
            if self.fail_save {
                return Err(SubmissionStoreError::IoError("disk full".to_string()));
            }
            self.saved.lock().unwrap().push(submission.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &SubmissionId,
        ) -> Result<Option<Submission>, SubmissionStoreError> {
            Ok(None)
        }

        async fn list_recent(
            &self,
            _limit: usize,
        ) -> Result<Vec<Submission>, SubmissionStoreError> {
            Ok(vec![])
        }
    }

    fn weights() -> WeightVector {
        let criteria = CriteriaSet::new(vec![
            Criterion::new("Transit Access", "transit_dist"),
            Criterion::new("Nearby City Facilities", "city_facility_dist"),
        ])
        .unwrap();
        WeightVector::from_criteria(&criteria, &[0.75, 0.25])
    }

    fn site(rank: usize) -> RankedSite {
        RankedSite {
            lat: 37.8,
            lon: -122.27,
            rank,
            final_score: 0.1,
        }
    }

    fn command(method: RankingMethod) -> SaveSubmissionCommand {
        SaveSubmissionCommand {
            method,
            submitter: SubmitterInfo {
                name: Some("  Ada ".to_string()),
                occupation: Some("".to_string()),
                location: Some("Oakland".to_string()),
                feedback: None,
            },
            weights: weights(),
            consistency: Some(ConsistencyDiagnostic::from_eigenvalue(2.0, 2)),
            top_sites: vec![site(1), site(2)],
        }
    }

    #[tokio::test]
    async fn saves_normalized_submission() {
        let repo = Arc::new(MockSubmissionRepository::new());
        let handler = SaveSubmissionHandler::new(repo.clone());

        let result = handler.handle(command(RankingMethod::Ahp)).await.unwrap();

        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], result.submission);
        assert_eq!(saved[0].submitter.name.as_deref(), Some("Ada"));
        assert_eq!(saved[0].submitter.occupation, None);
        assert!(saved[0].consistency.is_some());
        assert_eq!(saved[0].top_sites.len(), 2);
    }

    #[tokio::test]
    async fn wsm_submission_drops_consistency() {
        let repo = Arc::new(MockSubmissionRepository::new());
        let handler = SaveSubmissionHandler::new(repo.clone());

        let result = handler.handle(command(RankingMethod::Wsm)).await.unwrap();

        assert!(result.submission.consistency.is_none());
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_storage_error() {
        let handler = SaveSubmissionHandler::new(Arc::new(MockSubmissionRepository::failing()));

        let err = handler.handle(command(RankingMethod::Ahp)).await.unwrap_err();

        assert!(matches!(
            err,
            SaveSubmissionError::Storage(SubmissionStoreError::IoError(_))
        ));
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn rejects_empty_weights() {
        let repo = Arc::new(MockSubmissionRepository::new());
        let handler = SaveSubmissionHandler::new(repo.clone());
        let mut cmd = command(RankingMethod::Wsm);
        cmd.weights = WeightVector::default();

        let err = handler.handle(cmd).await.unwrap_err();

        assert!(matches!(err, SaveSubmissionError::Invalid(_)));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_zero_rank() {
        let handler = SaveSubmissionHandler::new(Arc::new(MockSubmissionRepository::new()));
        let mut cmd = command(RankingMethod::Ahp);
        cmd.top_sites = vec![site(0)];

        let err = handler.handle(cmd).await.unwrap_err();
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn command_reads_flat_json_document() {
        let cmd: SaveSubmissionCommand = serde_json::from_str(
            r#"{
                "method": "wsm",
                "name": "Ada",
                "feedback": "More parks please",
                "weights": {"transit_dist": 0.6, "city_facility_dist": 0.4},
                "top_sites": [{"lat": 37.8, "lon": -122.27, "rank": 1, "final_score": 0.0}]
            }"#,
        )
        .unwrap();

        assert_eq!(cmd.method, RankingMethod::Wsm);
        assert_eq!(cmd.submitter.name.as_deref(), Some("Ada"));
        assert_eq!(cmd.submitter.location, None);
        assert_eq!(cmd.weights.get("city_facility_dist"), 0.4);
        assert_eq!(cmd.top_sites[0].rank, 1);
        assert!(cmd.consistency.is_none());
    }

    #[test]
    fn command_without_method_is_an_ahp_map() {
        let cmd: SaveSubmissionCommand = serde_json::from_str(
            r#"{
                "name": "",
                "occupation": "Planner",
                "location": "Oakland",
                "feedback": "",
                "weights": {"transit_dist": 0.5, "city_facility_dist": 0.5},
                "top_sites": [{"lat": 37.8, "lon": -122.27, "rank": 1, "final_score": 0.25}]
            }"#,
        )
        .unwrap();

        assert_eq!(cmd.method, RankingMethod::Ahp);
        assert_eq!(cmd.submitter.occupation.as_deref(), Some("Planner"));
        assert_eq!(cmd.weights.get("transit_dist"), 0.5);
        assert_eq!(cmd.top_sites.len(), 1);
    }

    #[test]
    fn command_accepts_upper_case_method() {
        let cmd: SaveSubmissionCommand = serde_json::from_str(
            r#"{
                "name": "Ada",
                "occupation": "",
                "location": "",
                "feedback": "",
                "method": "WSM",
                "weights": {"transit_dist": 1.0},
                "top_sites": []
            }"#,
        )
        .unwrap();

        assert_eq!(cmd.method, RankingMethod::Wsm);
    }

    #[tokio::test]
    async fn saves_client_payload_without_method() {
        let repo = Arc::new(MockSubmissionRepository::new());
        let handler = SaveSubmissionHandler::new(repo.clone());
        let cmd: SaveSubmissionCommand = serde_json::from_str(
            r#"{"name": "  ", "weights": {"transit_dist": 1.0}, "top_sites": []}"#,
        )
        .unwrap();

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.submission.method, RankingMethod::Ahp);
        assert!(result.submission.submitter.is_anonymous());
        assert_eq!(repo.saved().len(), 1);
    }
}
