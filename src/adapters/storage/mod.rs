//! Storage Adapters
//!
//! Implementations of the SubmissionRepository port.
//!
//! ## Available Adapters
//!
//! - **FileSubmissionStore** - One JSON document per submission on disk
//! - **InMemorySubmissionStore** - Submissions in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSubmissionStore, InMemorySubmissionStore};
//!
//! // Production: file-based storage
//! let store = FileSubmissionStore::new("./data/submissions");
//!
//! // Testing: in-memory storage
//! let store = InMemorySubmissionStore::new();
//! ```

mod file_submission_store;
mod in_memory_submission_store;

pub use file_submission_store::FileSubmissionStore;
pub use in_memory_submission_store::InMemorySubmissionStore;
