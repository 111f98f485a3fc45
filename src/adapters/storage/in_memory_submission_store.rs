//! In-Memory Submission Store Adapter
//!
//! Keeps submissions in a map. Useful for testing and for runs where
//! nothing should touch the disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::Submission;
use crate::ports::{SubmissionRepository, SubmissionStoreError};

/// In-memory storage for submissions
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionStore {
    submissions: Arc<RwLock<HashMap<SubmissionId, Submission>>>,
}

impl InMemorySubmissionStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored submissions
    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.submissions.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), SubmissionStoreError> {
        let mut submissions = self.submissions.write().await;
        if submissions.contains_key(&submission.id) {
            return Err(SubmissionStoreError::AlreadyExists(submission.id));
        }
        submissions.insert(submission.id, submission.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, SubmissionStoreError> {
        Ok(self.submissions.read().await.get(id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Submission>, SubmissionStoreError> {
        let mut all: Vec<Submission> = self.submissions.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit);
        Ok(all)
    }
}
