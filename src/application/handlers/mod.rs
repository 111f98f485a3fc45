//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;
pub mod submission;

pub use ranking::{RankSitesCommand, RankSitesError, RankSitesHandler, RankingOutcome};
pub use submission::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    SaveSubmissionCommand, SaveSubmissionError, SaveSubmissionHandler, SaveSubmissionResult,
};
