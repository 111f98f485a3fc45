//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier for a saved ranking submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Creates a new random SubmissionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SubmissionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_id_new_is_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }

    #[test]
    fn submission_id_parses_from_display() {
        let id = SubmissionId::new();
        let parsed: SubmissionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn submission_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SubmissionId>().is_err());
    }

    #[test]
    fn submission_id_serializes_transparently() {
        let uuid = Uuid::parse_str("7f1c2a9e-1b34-4c51-9d2b-3f0a4e6b8c11").unwrap();
        let json = serde_json::to_string(&SubmissionId::from_uuid(uuid)).unwrap();
        assert_eq!(json, "\"7f1c2a9e-1b34-4c51-9d2b-3f0a4e6b8c11\"");
    }
}
