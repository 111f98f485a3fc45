//! Submission repository port (write side).
//!
//! Persists saved rankings together with submitter metadata. Storage is a
//! separate failure domain from scoring: a failing store never affects a
//! ranking computation.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::domain::submission::Submission;

/// Errors that can occur during submission storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionStoreError {
    #[error("Submission not found: {0}")]
    NotFound(SubmissionId),

    #[error("Submission already exists: {0}")]
    AlreadyExists(SubmissionId),

    #[error("Failed to serialize submission: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize submission: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SubmissionStoreError> for DomainError {
    fn from(err: SubmissionStoreError) -> Self {
        let code = match &err {
            SubmissionStoreError::NotFound(_) => ErrorCode::SubmissionNotFound,
            SubmissionStoreError::SerializationFailed(_)
            | SubmissionStoreError::DeserializationFailed(_) => ErrorCode::SerializationError,
            SubmissionStoreError::AlreadyExists(_) | SubmissionStoreError::IoError(_) => {
                ErrorCode::StorageError
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Repository port for saved submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Save a new submission.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a submission with the same id was saved before
    /// - `SerializationFailed` / `IoError` on persistence failure
    async fn save(&self, submission: &Submission) -> Result<(), SubmissionStoreError>;

    /// Find a submission by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubmissionId)
        -> Result<Option<Submission>, SubmissionStoreError>;

    /// Most recent submissions first, at most `limit` of them.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Submission>, SubmissionStoreError>;
}
