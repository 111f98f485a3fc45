//! Submission Module - A user's saved ranking with optional feedback.

mod record;

pub use record::{RankingMethod, Submission, SubmitterInfo};
