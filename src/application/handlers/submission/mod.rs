//! Submission command and query handlers.

mod get_submission;
mod list_submissions;
mod save_submission;

pub use get_submission::{GetSubmissionHandler, GetSubmissionQuery};
pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery};
pub use save_submission::{
    SaveSubmissionCommand, SaveSubmissionError, SaveSubmissionHandler, SaveSubmissionResult,
};
