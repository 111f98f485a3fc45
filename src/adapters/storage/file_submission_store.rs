//! File-based Submission Store Adapter
//!
//! Stores each submission as one pretty-printed JSON document named
//! `<submission_id>.json` inside a base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::Submission;
use crate::ports::{SubmissionRepository, SubmissionStoreError};

/// File-based storage for submissions
#[derive(Debug, Clone)]
pub struct FileSubmissionStore {
    base_path: PathBuf,
}

impl FileSubmissionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first save.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSubmissionStore::new("./data/submissions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn submission_path(&self, id: &SubmissionId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    async fn ensure_dir(&self) -> Result<(), SubmissionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SubmissionStoreError::IoError(e.to_string()))
    }

    /// Writes `<path>.tmp` then renames it over `path`, so readers never
    /// see a half-written document. The tmp file is removed on failure.
    async fn write_atomically(path: &Path, json: String) -> Result<(), SubmissionStoreError> {
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, json).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(SubmissionStoreError::IoError(e.to_string()));
        }
        if let Err(e) = fs::rename(&tmp, path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(SubmissionStoreError::IoError(e.to_string()));
        }
        Ok(())
    }

    async fn read_submission(path: &Path) -> Result<Submission, SubmissionStoreError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| SubmissionStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json)
            .map_err(|e| SubmissionStoreError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl SubmissionRepository for FileSubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), SubmissionStoreError> {
        self.ensure_dir().await?;

        let path = self.submission_path(&submission.id);
        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| SubmissionStoreError::IoError(e.to_string()))?;
        if exists {
            return Err(SubmissionStoreError::AlreadyExists(submission.id));
        }

        let json = serde_json::to_string_pretty(submission)
            .map_err(|e| SubmissionStoreError::SerializationFailed(e.to_string()))?;

        Self::write_atomically(&path, json).await?;

        debug!(submission_id = %submission.id, path = %path.display(), "Saved submission");
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, SubmissionStoreError> {
        let path = self.submission_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_submission(&path).await.map(Some)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Submission>, SubmissionStoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| SubmissionStoreError::IoError(e.to_string()))?;

        let mut submissions = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SubmissionStoreError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_submission(&path).await {
                Ok(submission) => submissions.push(submission),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable submission"),
            }
        }

        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        submissions.truncate(limit);
        Ok(submissions)
    }
}
