//! GetSubmissionHandler - Query handler for a single saved submission.

use std::sync::Arc;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::Submission;
use crate::ports::{SubmissionRepository, SubmissionStoreError};

/// Query to get a submission by ID.
#[derive(Debug, Clone)]
pub struct GetSubmissionQuery {
    pub submission_id: SubmissionId,
}

/// Handler for retrieving a submission.
pub struct GetSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl GetSubmissionHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSubmissionQuery) -> Result<Submission, SubmissionStoreError> {
        self.repository
            .find_by_id(&query.submission_id)
            .await?
            .ok_or(SubmissionStoreError::NotFound(query.submission_id))
    }
}
