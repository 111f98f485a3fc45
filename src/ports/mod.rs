//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SiteSource` - Loads the candidate site table
//! - `SubmissionRepository` - Persists saved rankings

mod site_source;
mod submission_repository;

pub use site_source::{SiteSource, SiteSourceError};
pub use submission_repository::{SubmissionRepository, SubmissionStoreError};
