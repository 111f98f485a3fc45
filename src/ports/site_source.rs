//! Site source port - where candidate sites come from.
//!
//! The scoring engine only needs a table of raw criterion values plus one
//! geographic point per site. Reading geometry files, reprojecting and
//! computing centroids all happen behind this port.

use async_trait::async_trait;

use crate::domain::ahp::CriteriaSet;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::SiteTable;

/// Errors raised while loading the site table.
#[derive(Debug, thiserror::Error)]
pub enum SiteSourceError {
    #[error("Site data not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Malformed site data: {0}")]
    Malformed(String),

    #[error("Unsupported coordinate reference system: {0}")]
    UnsupportedCrs(String),
}

impl From<SiteSourceError> for DomainError {
    fn from(err: SiteSourceError) -> Self {
        DomainError::new(ErrorCode::SiteDataUnavailable, err.to_string())
    }
}

/// Port for loading candidate sites.
#[async_trait]
pub trait SiteSource: Send + Sync {
    /// Loads every site with its values for the columns of `criteria`.
    ///
    /// The returned table's columns are `criteria.columns()` in order.
    /// Absent or non-numeric values are `None`; they are never an error.
    ///
    /// # Errors
    ///
    /// - `NotFound` / `IoError` when the data cannot be read
    /// - `Malformed` when it cannot be parsed
    /// - `UnsupportedCrs` when positions cannot be expressed in lon/lat
    async fn load_sites(&self, criteria: &CriteriaSet) -> Result<SiteTable, SiteSourceError>;
}
