//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Ranking never touches the submission store; saving never re-scores.

pub mod handlers;

pub use handlers::{
    // Ranking handlers
    RankSitesCommand, RankSitesError, RankSitesHandler, RankingOutcome,
    // Submission handlers
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    SaveSubmissionCommand, SaveSubmissionError, SaveSubmissionHandler, SaveSubmissionResult,
};
