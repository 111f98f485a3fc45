//! ListSubmissionsHandler - Query handler for recent submissions.

use std::sync::Arc;

use crate::domain::submission::Submission;
use crate::ports::{SubmissionRepository, SubmissionStoreError};

/// Page size used when the query does not specify one.
pub const DEFAULT_LIMIT: usize = 20;

/// Largest page a single query may request.
pub const MAX_LIMIT: usize = 100;

/// Query to list the most recent submissions.
#[derive(Debug, Clone, Default)]
pub struct ListSubmissionsQuery {
    pub limit: Option<usize>,
}

impl ListSubmissionsQuery {
    fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Handler for listing submissions, newest first.
pub struct ListSubmissionsHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListSubmissionsQuery,
    ) -> Result<Vec<Submission>, SubmissionStoreError> {
        self.repository.list_recent(query.effective_limit()).await
    }
}
