//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `geojson` - Candidate sites from a GeoJSON FeatureCollection
//! - `storage` - Submission persistence (file-based, in-memory)

pub mod geojson;
pub mod storage;

pub use geojson::GeoJsonSiteSource;
pub use storage::{FileSubmissionStore, InMemorySubmissionStore};
